use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::source::{AiSource, ExpertRole};

/// One ingested transcript.
///
/// Fields are private: a record is built once by the ingestion pipeline and never
/// changes afterwards. Read access goes through the accessors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    id: String,
    #[serde(rename = "ai_source")]
    source: AiSource,
    role: ExpertRole,
    title: String,
    content: String,
    #[serde(default)]
    summary: Option<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Derived fields handed to [`ConversationRecord::from_parts`]
#[derive(Debug, Clone)]
pub struct RecordParts {
    pub id: String,
    pub source: AiSource,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ConversationRecord {
    /// Assemble a record from already-derived parts.
    ///
    /// The role always follows the source, and `updated_at` starts equal to
    /// `created_at`.
    pub fn from_parts(parts: RecordParts) -> Self {
        Self {
            id: parts.id,
            source: parts.source,
            role: parts.source.role(),
            title: parts.title,
            content: parts.content,
            summary: parts.summary,
            tags: parts.tags,
            created_at: parts.created_at,
            updated_at: parts.created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> AiSource {
        self.source
    }

    pub fn role(&self) -> ExpertRole {
        self.role
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Summary when present and non-empty, otherwise the title
    pub fn summary_or_title(&self) -> &str {
        match self.summary.as_deref() {
            Some(summary) if !summary.is_empty() => summary,
            _ => &self.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn parts(summary: Option<&str>) -> RecordParts {
        RecordParts {
            id: "rec-1".to_string(),
            source: AiSource::Grok,
            title: "notes".to_string(),
            content: "some content".to_string(),
            summary: summary.map(str::to_string),
            tags: vec!["some".to_string()],
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_from_parts_derives_role_and_updated_at() {
        let record = ConversationRecord::from_parts(parts(Some("s")));
        assert_eq!(record.role(), ExpertRole::Marketing);
        assert_eq!(record.created_at(), record.updated_at());
    }

    #[test]
    fn test_summary_or_title_fallback() {
        let with_summary = ConversationRecord::from_parts(parts(Some("short")));
        assert_eq!(with_summary.summary_or_title(), "short");

        let empty_summary = ConversationRecord::from_parts(parts(Some("")));
        assert_eq!(empty_summary.summary_or_title(), "notes");

        let no_summary = ConversationRecord::from_parts(parts(None));
        assert_eq!(no_summary.summary_or_title(), "notes");
    }

    #[test]
    fn test_serializes_source_as_ai_source() {
        let record = ConversationRecord::from_parts(parts(None));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["ai_source"], "grok");
        assert_eq!(json["role"], "marketing");
    }
}
