//! Ingestion pipeline: uploaded transcript files to typed conversation records
//!
//! # Error Handling Strategy
//!
//! Ingestion is per-file and never aborts a batch:
//!
//! - **Decode failures**: A file whose bytes are not UTF-8 yields [`IngestError::Read`]
//!   and no record. Disk reads add I/O, size and extension failures.
//!
//! - **Batch boundary**: [`ingest_batch`] and [`ingest_paths`] catch each failure, log it
//!   through `tracing`, record it in [`BatchOutcome::failures`] with a status line naming
//!   the file, and move on to the next file.
//!
//! - **No partial records**: A record is only appended to the outcome once every field has
//!   been derived, so a failed file leaves nothing behind.
//!
//! Source detection and tagging are keyword heuristics, not per-provider parsers: every
//! accepted file goes through the same generic path regardless of its extension.

pub mod deserializers;
pub mod detect;
pub mod error;
pub mod tags;
pub mod upload;

pub use detect::detect_source;
pub use error::IngestError;
pub use tags::extract_tags;
pub use upload::{
    BatchOutcome, FileFailure, UploadFile, ingest, ingest_batch, ingest_paths, read_upload,
};
