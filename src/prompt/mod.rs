//! Context prompt composition
//!
//! Builds the text block a user pastes into another AI chat from the search results they
//! picked. The format is fixed:
//!
//! ```text
//! [배경 정보]
//! - <M/d>: <summary or title>
//!
//! [요청]
//! <request, or the default request>
//! ```

use chrono::{DateTime, Local, Utc};

use crate::models::{AiSource, ConversationRecord};

pub const BACKGROUND_HEADER: &str = "[배경 정보]";
pub const REQUEST_HEADER: &str = "[요청]";
/// Used when the free-text request is empty or whitespace
pub const DEFAULT_REQUEST: &str = "위 내용을 바탕으로 도와주세요.";

/// Month/day without padding or year, in local time ("1/5")
pub fn format_month_day(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%-m/%-d").to_string()
}

/// Render the prompt for `selected`, in the order given.
///
/// Returns `None` when nothing is selected; callers show nothing in that case.
pub fn compose(selected: &[&ConversationRecord], free_text: &str) -> Option<String> {
    if selected.is_empty() {
        return None;
    }

    let mut prompt = String::from(BACKGROUND_HEADER);
    prompt.push('\n');
    for record in selected {
        prompt.push_str(&format!(
            "- {}: {}\n",
            format_month_day(&record.created_at()),
            record.summary_or_title()
        ));
    }

    let request = if free_text.trim().is_empty() { DEFAULT_REQUEST } else { free_text };
    prompt.push('\n');
    prompt.push_str(REQUEST_HEADER);
    prompt.push('\n');
    prompt.push_str(request);

    Some(prompt)
}

/// Record ids picked from search results, kept in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected records found in `results`, in selection order.
    ///
    /// Ids no longer present in `results` are skipped.
    pub fn resolve<'a>(&self, results: &[&'a ConversationRecord]) -> Vec<&'a ConversationRecord> {
        self.ids
            .iter()
            .filter_map(|id| results.iter().find(|record| record.id() == id).copied())
            .collect()
    }
}

/// Web page to open the composed prompt in
pub fn handoff_url(target: AiSource) -> &'static str {
    target.profile().url
}

/// Link label built from the capitalized source key, e.g. "🟢 Gpt에서 열기"
pub fn handoff_label(target: AiSource) -> String {
    let key = target.as_str();
    let mut chars = key.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{} {}에서 열기", target.profile().icon, capitalized)
}
