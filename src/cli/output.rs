use std::io::{self, Write};

use anyhow::Result;

use crate::models::ConversationRecord;
use crate::parsers::BatchOutcome;
use crate::tui::format_timestamp;
use crate::utils::sanitize_for_terminal;

/// Per-file status lines and the batch summary, on stderr
pub(super) fn print_batch_report(outcome: &BatchOutcome) {
    for status in &outcome.statuses {
        eprintln!("{}", sanitize_for_terminal(status));
    }
    for failure in &outcome.failures {
        eprintln!("  {}", sanitize_for_terminal(&failure.error.to_string()));
    }
    if let Some(summary) = outcome.summary_status() {
        eprintln!("{}", summary);
    }
}

/// Two-line listing: header with source and role, then summary and tags
pub(super) fn print_record(number: usize, record: &ConversationRecord) {
    let profile = record.source().profile();
    println!(
        "{:>3}. {} {} [{} / {}] {}",
        number,
        profile.icon,
        format_timestamp(&record.created_at()),
        profile.name,
        profile.role_label,
        sanitize_for_terminal(record.title())
    );

    let mut detail = sanitize_for_terminal(record.summary_or_title()).replace('\n', " ");
    if !record.tags().is_empty() {
        detail.push_str(&format!("  #{}", record.tags().join(" #")));
    }
    println!("     {}", detail);
}

pub(super) fn print_records_json(records: &[ConversationRecord]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, records)?;
    writeln!(handle)?;
    Ok(())
}
