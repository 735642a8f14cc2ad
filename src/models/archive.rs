use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::source::AiSource;

/// Daily digest shown by the archive viewer. Read-only in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyArchiveEntry {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_archive_date")]
    pub date: NaiveDate,
    pub summary: String,
    #[serde(default)]
    pub todos: Vec<TodoItem>,
    #[serde(default)]
    pub ideas: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Timeline row; `conversation_id` is a lookup key only and may not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_clock_time")]
    pub time: String,
    pub ai_source: AiSource,
    pub summary: String,
    pub conversation_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_archive_with_defaults() {
        let json = r#"{
            "date": "2024-01-15",
            "summary": "quiet day",
            "timeline": [
                {"time": "09:00", "ai_source": "gemini", "summary": "PT", "conversation_id": "1"}
            ]
        }"#;

        let entry: DailyArchiveEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(entry.todos.is_empty());
        assert!(entry.ideas.is_empty());
        assert_eq!(entry.timeline[0].ai_source, AiSource::Gemini);
    }

    #[test]
    fn test_todo_due_date_optional() {
        let todo: TodoItem =
            serde_json::from_str(r#"{"text":"pay bill","due_date":"2024-01-20"}"#).unwrap();
        assert!(!todo.completed);
        assert_eq!(todo.due_date, NaiveDate::from_ymd_opt(2024, 1, 20));
    }
}
