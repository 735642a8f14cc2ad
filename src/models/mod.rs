//! Data models for ingested conversations and daily archives.
//!
//! - [`ConversationRecord`] - One uploaded transcript, immutable once built
//! - [`AiSource`] / [`ExpertRole`] - Origin service and the role it is filed under
//! - [`SourceProfile`] - Static per-source table (icon, role label, web URL)
//! - [`DailyArchiveEntry`] - Read-only daily digest with todos, ideas and a timeline

pub mod archive;
pub mod conversation;
pub mod source;

pub use archive::{DailyArchiveEntry, TimelineItem, TodoItem};
pub use conversation::{ConversationRecord, RecordParts};
pub use source::{AiSource, ExpertRole, SourceProfile};
