//! Brain System - collect AI chat exports and turn them into reusable context prompts
//!
//! This library ingests transcripts exported from Claude, Gemini, Grok and ChatGPT,
//! files each one under the role its source plays, and lets the user find and reuse
//! them. It supports:
//!
//! - Ingesting `.json`, `.md` and `.txt` exports with keyword-based source detection
//! - Naive frequency tagging of Hangul and Latin words
//! - Case-insensitive substring search that keeps upload order
//! - Composing a "background + request" prompt from selected conversations
//! - Read-only daily archives with a timeline of conversations
//!
//! # Example
//!
//! ```no_run
//! use brain_system::{ConversationStore, UploadFile, compose, ingest_batch, search};
//!
//! let outcome = ingest_batch(vec![UploadFile::new("gemini-pt.md", "PT 등록 논의")]);
//! let mut store = ConversationStore::new();
//! store.append(outcome.records);
//!
//! let results = search(&store, "pt");
//! if let Some(prompt) = compose(&results, "") {
//!     println!("{}", prompt);
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod models;
pub mod parsers;
pub mod prompt;
pub mod search;
pub mod store;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use clipboard::copy_prompt;
pub use config::AppConfig;
pub use models::{AiSource, ConversationRecord, DailyArchiveEntry, ExpertRole};
pub use parsers::{BatchOutcome, IngestError, UploadFile, ingest, ingest_batch, ingest_paths};
pub use prompt::{Selection, compose};
pub use search::search;
pub use store::ConversationStore;
