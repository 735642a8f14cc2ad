//! Daily archive lookup
//!
//! Archives are read-only display data: either a JSON array of
//! [`DailyArchiveEntry`] named in the config, or a built-in sample dated today.
//! Timeline rows point at conversations by id; [`resolve_timeline`] looks them up in
//! the current store and leaves dangling ids unresolved.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::models::{AiSource, ConversationRecord, DailyArchiveEntry, TimelineItem, TodoItem};
use crate::store::ConversationStore;

/// Days listed by the date picker, today included
pub const RECENT_DAYS: usize = 7;

/// Shown when the picked date has no archive
pub const NO_ARCHIVE_MESSAGE: &str = "선택한 날짜의 아카이브가 없습니다";

/// Sample archive dated `today`, used when no archive file is configured
pub fn sample_archives(today: NaiveDate) -> Vec<DailyArchiveEntry> {
    let task = |text: &str| TodoItem { text: text.to_string(), completed: false, due_date: None };
    let item = |time: &str, ai_source: AiSource, summary: &str, id: &str| TimelineItem {
        time: time.to_string(),
        ai_source,
        summary: summary.to_string(),
        conversation_id: id.to_string(),
    };

    vec![DailyArchiveEntry {
        date: today,
        summary: "오늘은 뭘좀 관리자페이지 작업과 PT 등록 논의를 진행했습니다.".to_string(),
        todos: vec![task("가스비 납부 (1/20까지)"), task("PT 등록"), task("희영이 연락")],
        ideas: vec!["A앱 - 위치 기반 소셜 서비스".to_string()],
        timeline: vec![
            item("09:00", AiSource::Gemini, "PT 등록 논의", "1"),
            item("11:30", AiSource::Claude, "뭘좀 관리자페이지 작업", "2"),
            item("14:00", AiSource::Grok, "마케팅 아이디어 브레인스톰", "3"),
        ],
    }]
}

/// Read a JSON array of archive entries
pub fn load_archives(path: &Path) -> Result<Vec<DailyArchiveEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read archive file: {}", path.display()))?;
    let entries: Vec<DailyArchiveEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse archive file: {}", path.display()))?;

    debug!(path = %path.display(), entries = entries.len(), "archives loaded");
    Ok(entries)
}

/// Configured archive file when set, otherwise the sample
pub fn archives_for(archive_file: Option<&Path>, today: NaiveDate) -> Result<Vec<DailyArchiveEntry>> {
    match archive_file {
        Some(path) => load_archives(path),
        None => Ok(sample_archives(today)),
    }
}

/// Archive for an exact date, if any
pub fn find_archive(entries: &[DailyArchiveEntry], date: NaiveDate) -> Option<&DailyArchiveEntry> {
    entries.iter().find(|entry| entry.date == date)
}

/// `today` and the preceding days, newest first
pub fn recent_dates(today: NaiveDate, days: usize) -> Vec<NaiveDate> {
    (0..days as u64).filter_map(|offset| today.checked_sub_days(Days::new(offset))).collect()
}

/// Pair each timeline row with its conversation, if the id is in the store
pub fn resolve_timeline<'a>(
    entry: &'a DailyArchiveEntry,
    store: &'a ConversationStore,
) -> Vec<(&'a TimelineItem, Option<&'a ConversationRecord>)> {
    entry.timeline.iter().map(|item| (item, store.get(&item.conversation_id))).collect()
}

/// Korean long date, e.g. "2024년 1월 5일"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%Y년 %-m월 %-d일").to_string()
}

/// Date picker label, e.g. "1월 5일 (금)"
pub fn format_picker_label(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    };
    format!("{} ({})", date.format("%-m월 %-d일"), weekday)
}
