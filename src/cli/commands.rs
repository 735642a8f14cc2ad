use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use super::output::{print_batch_report, print_record, print_records_json};
use crate::archive::{
    NO_ARCHIVE_MESSAGE, RECENT_DAYS, archives_for, find_archive, format_long_date,
    format_picker_label, recent_dates, resolve_timeline,
};
use crate::clipboard::copy_prompt;
use crate::config::AppConfig;
use crate::models::AiSource;
use crate::parsers::{BatchOutcome, ingest_paths};
use crate::prompt::{Selection, compose, handoff_label, handoff_url};
use crate::search::search;
use crate::store::ConversationStore;
use crate::utils::{format_path_with_tilde, get_config_path, sanitize_for_terminal};

#[derive(Parser)]
#[command(name = "brain-system")]
#[command(version = "0.1.0")]
#[command(about = "Collect AI chat exports and compose context prompts from them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest exported conversations and list the resulting records
    Ingest {
        /// Exported transcripts (.json, .md, .txt)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search ingested conversations by title, content or tag
    Search {
        /// Case-insensitive substring to look for
        query: String,
        /// Exported transcripts to search
        #[arg(short, long = "file", required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },
    /// Compose a context prompt from selected search results
    Prompt {
        /// Exported transcripts to search
        #[arg(short, long = "file", required = true, num_args = 1..)]
        files: Vec<PathBuf>,
        /// Search query that produces the result list
        #[arg(short, long)]
        query: String,
        /// 1-based result numbers, in the order they should appear
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        select: Vec<usize>,
        /// Request placed under [요청]
        #[arg(short, long, default_value = "")]
        request: String,
        /// AI to hand the prompt to (defaults to the configured target)
        #[arg(short, long)]
        target: Option<AiSource>,
        /// Copy the prompt to the system clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Show conversation counts per AI
    Stats {
        /// Exported transcripts to count
        #[arg(short, long = "file", num_args = 1..)]
        files: Vec<PathBuf>,
    },
    /// List the expert shortcuts for each AI
    Links,
    /// Show where to talk to the secretary
    Secretary {
        /// AI acting as secretary (defaults to the configured one)
        #[arg(long)]
        ai: Option<AiSource>,
    },
    /// Show the daily archive for a date
    Archive {
        /// Date to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Exported transcripts used to resolve timeline entries
        #[arg(short, long = "file", num_args = 1..)]
        files: Vec<PathBuf>,
    },
    /// Open the interactive dashboard
    Tui {
        /// Exported transcripts to load
        #[arg(short, long = "file", num_args = 1..)]
        files: Vec<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ingest { files, json }) => ingest_command(&files, json)?,
        Some(Commands::Search { query, files }) => search_command(&query, &files)?,
        Some(Commands::Prompt { files, query, select, request, target, copy }) => {
            let config = AppConfig::load()?;
            let target = target.unwrap_or(config.default_target);
            prompt_command(&files, &query, &select, &request, target, copy)?;
        }
        Some(Commands::Stats { files }) => stats_command(&files)?,
        Some(Commands::Links) => links_command(),
        Some(Commands::Secretary { ai }) => {
            let config = AppConfig::load()?;
            secretary_command(ai.unwrap_or(config.default_secretary));
        }
        Some(Commands::Archive { date, files }) => {
            let config = AppConfig::load()?;
            archive_command(date, &files, &config)?;
        }
        Some(Commands::Tui { files }) => {
            let config = AppConfig::load()?;
            crate::tui::run_interactive(ingest_reported(&files), &config)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Ingest files in order, reporting per-file status on stderr
fn ingest_reported(files: &[PathBuf]) -> BatchOutcome {
    if files.is_empty() {
        return BatchOutcome::default();
    }

    let outcome = ingest_paths(files);
    print_batch_report(&outcome);
    outcome
}

/// Ingest files into a fresh store
fn load_store(files: &[PathBuf]) -> ConversationStore {
    let mut store = ConversationStore::new();
    store.append(ingest_reported(files).records);
    store
}

fn ingest_command(files: &[PathBuf], json: bool) -> Result<()> {
    let store = load_store(files);

    if json {
        print_records_json(store.records())?;
    } else {
        for (idx, record) in store.iter().enumerate() {
            print_record(idx + 1, record);
        }
    }

    Ok(())
}

fn search_command(query: &str, files: &[PathBuf]) -> Result<()> {
    let store = load_store(files);
    let results = search(&store, query);

    println!("{}건의 관련 대화를 찾았습니다", results.len());
    for (idx, record) in results.iter().enumerate() {
        print_record(idx + 1, record);
    }

    Ok(())
}

fn prompt_command(
    files: &[PathBuf],
    query: &str,
    picks: &[usize],
    request: &str,
    target: AiSource,
    copy: bool,
) -> Result<()> {
    let store = load_store(files);
    let results = search(&store, query);

    let mut selection = Selection::new();
    for &pick in picks {
        if pick == 0 || pick > results.len() {
            bail!("Result number {} is out of range (found {} results)", pick, results.len());
        }
        let id = results[pick - 1].id();
        if !selection.contains(id) {
            selection.toggle(id);
        }
    }

    let selected = selection.resolve(&results);
    let Some(prompt) = compose(&selected, request) else {
        eprintln!("No conversations selected; use --select to pick search results");
        return Ok(());
    };

    // Piped output is the prompt verbatim; a terminal gets it with escapes stripped
    if io::stdout().is_terminal() {
        println!("{}", sanitize_for_terminal(&prompt));
    } else {
        println!("{}", prompt);
    }

    if copy {
        match copy_prompt(&prompt) {
            Ok(()) => eprintln!("✓ 프롬프트가 복사되었습니다!"),
            Err(e) => eprintln!("✗ Clipboard error: {:#}", e),
        }
    }

    println!();
    println!("{}: {}", handoff_label(target), handoff_url(target));

    Ok(())
}

fn stats_command(files: &[PathBuf]) -> Result<()> {
    let store = load_store(files);
    let today = Local::now().date_naive();

    println!("📊 오늘의 현황 ({})", format_long_date(today));
    println!("================================");
    for source in AiSource::ALL {
        let profile = source.profile();
        println!(
            "{} {:<7} ({}): {}회",
            profile.icon,
            profile.name,
            profile.role_label,
            store.count_by_source(source)
        );
    }
    println!();
    println!("Total conversations: {}", store.len());

    if let Ok(path) = get_config_path() {
        println!("Config file: {}", format_path_with_tilde(&path));
    }

    Ok(())
}

fn links_command() {
    println!("👥 전문가 바로가기");
    for source in AiSource::ALL {
        let profile = source.profile();
        println!("{} {:<7} ({})  {}", profile.icon, profile.name, profile.role_label, profile.url);
    }
    println!();
    println!("💡 대화 후 내보내기를 잊지 마세요!");
}

fn secretary_command(current: AiSource) {
    let current_profile = current.profile();
    let current_label = format!("{} {}", current_profile.icon, current_profile.name);

    println!("🤵 비서에게 말하기");
    println!("현재: {}", current_label);
    for source in AiSource::SECRETARY_OPTIONS {
        let profile = source.profile();
        let marker = if source == current { ">" } else { " " };
        println!("  {} {} {:<7} {}", marker, profile.icon, profile.name, profile.url);
    }
    println!();
    println!("💬 비서와 대화하려면 {}를 열어주세요", current_label);
    println!("{} 열기: {}", current_label, current_profile.url);
    println!("💡 대화가 끝나면 [공유 > 링크 복사] 또는 내보내기 해주세요");
}

fn archive_command(date: Option<NaiveDate>, files: &[PathBuf], config: &AppConfig) -> Result<()> {
    let store = load_store(files);
    let today = Local::now().date_naive();
    let selected = date.unwrap_or(today);
    let archives = archives_for(config.archive_file.as_deref(), today)?;

    println!("📅 일일 아카이브");
    for day in recent_dates(today, RECENT_DAYS) {
        let marker = if day == selected { ">" } else { " " };
        println!("{} {}", marker, format_picker_label(day));
    }
    println!();

    let Some(entry) = find_archive(&archives, selected) else {
        println!("{}", NO_ARCHIVE_MESSAGE);
        return Ok(());
    };

    println!("📊 {} 요약", format_long_date(entry.date));
    println!("{}", sanitize_for_terminal(&entry.summary));
    println!();

    println!("🕐 타임라인");
    for (item, record) in resolve_timeline(entry, &store) {
        let linked = record
            .map(|r| format!(" -> {}", sanitize_for_terminal(r.title())))
            .unwrap_or_default();
        println!(
            "  {} {} {}{}",
            item.time,
            item.ai_source.profile().icon,
            sanitize_for_terminal(&item.summary),
            linked
        );
    }
    println!();

    println!("✅ 할 일");
    for todo in &entry.todos {
        let check = if todo.completed { "☑️" } else { "☐" };
        let due = todo.due_date.map(|d| format!(" (due {})", d)).unwrap_or_default();
        println!("  {} {}{}", check, sanitize_for_terminal(&todo.text), due);
    }

    if !entry.ideas.is_empty() {
        println!();
        println!("💡 아이디어");
        for idea in &entry.ideas {
            println!("  • {}", sanitize_for_terminal(idea));
        }
    }

    Ok(())
}
