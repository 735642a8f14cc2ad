use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::detect::detect_source;
use super::error::IngestError;
use super::tags::extract_tags;
use crate::models::{ConversationRecord, RecordParts};
use crate::utils::validate_file_size;

/// Extensions accepted from the file picker
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["json", "md", "txt"];

/// Characters of content kept in the summary before the ellipsis
pub const SUMMARY_CHARS: usize = 200;

const SUMMARY_ELLIPSIS: &str = "...";

/// Raw uploaded file: its name and undecoded bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }
}

/// One file that could not be ingested
#[derive(Debug)]
pub struct FileFailure {
    pub file: String,
    pub error: IngestError,
}

/// Result of processing a batch of uploads in order
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<ConversationRecord>,
    pub failures: Vec<FileFailure>,
    /// Per-file status lines in processing order
    pub statuses: Vec<String>,
}

impl BatchOutcome {
    fn push(&mut self, file: String, result: Result<Vec<ConversationRecord>, IngestError>) {
        match result {
            Ok(records) => {
                self.statuses.push(format!("{} 처리 완료", file));
                self.records.extend(records);
            }
            Err(error) => {
                warn!(file = %file, error = %error, "failed to ingest upload");
                self.statuses.push(format!("{} 처리 실패", file));
                self.failures.push(FileFailure { file, error });
            }
        }
    }

    /// Final status line, only when at least one record came out of the batch
    pub fn summary_status(&self) -> Option<String> {
        if self.records.is_empty() {
            None
        } else {
            Some(format!("{}개 대화 업로드 완료!", self.records.len()))
        }
    }
}

/// File name minus one trailing `.json`, `.md` or `.txt`
pub fn strip_title_extension(name: &str) -> &str {
    for ext in [".json", ".md", ".txt"] {
        if let Some(stem) = name.strip_suffix(ext) {
            return stem;
        }
    }
    name
}

/// First [`SUMMARY_CHARS`] characters plus an ellipsis, appended even to short content
pub fn summarize(content: &str) -> String {
    let mut summary: String = content.chars().take(SUMMARY_CHARS).collect();
    summary.push_str(SUMMARY_ELLIPSIS);
    summary
}

/// Derive every record field from a decoded file
pub fn build_record(name: &str, content: String, created_at: DateTime<Utc>) -> ConversationRecord {
    let source = detect_source(name, &content);
    let summary = summarize(&content);
    let tags = extract_tags(&content);

    ConversationRecord::from_parts(RecordParts {
        id: Uuid::new_v4().to_string(),
        source,
        title: strip_title_extension(name).to_string(),
        content,
        summary: Some(summary),
        tags,
        created_at,
    })
}

/// Turn one uploaded file into conversation records.
///
/// Always one record per file; the only failure is content that is not UTF-8.
pub fn ingest(file: &UploadFile) -> Result<Vec<ConversationRecord>, IngestError> {
    let content = String::from_utf8(file.bytes.clone())
        .map_err(|source| IngestError::Read { file: file.name.clone(), source })?;

    let record = build_record(&file.name, content, Utc::now());
    debug!(
        file = %file.name,
        source = %record.source(),
        tags = ?record.tags(),
        "ingested upload"
    );

    Ok(vec![record])
}

/// Ingest files sequentially; a failing file is reported and the rest continue
pub fn ingest_batch<I>(files: I) -> BatchOutcome
where
    I: IntoIterator<Item = UploadFile>,
{
    let mut outcome = BatchOutcome::default();
    for file in files {
        let result = ingest(&file);
        outcome.push(file.name, result);
    }

    info!(
        records = outcome.records.len(),
        failed = outcome.failures.len(),
        "upload batch processed"
    );
    outcome
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Read an upload from disk, enforcing the accepted extensions and size limit
pub fn read_upload(path: &Path) -> Result<UploadFile, IngestError> {
    if !has_accepted_extension(path) {
        return Err(IngestError::UnsupportedExtension { path: path.to_path_buf() });
    }

    let mut file =
        File::open(path).map_err(|source| IngestError::Io { path: path.to_path_buf(), source })?;
    // Size is checked on the open handle, not the path
    validate_file_size(&file, path)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| IngestError::Io { path: path.to_path_buf(), source })?;

    Ok(UploadFile { name: display_name(path), bytes })
}

/// Read and ingest files from disk in the given order
pub fn ingest_paths(paths: &[PathBuf]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for path in paths {
        let name = display_name(path);
        let result = read_upload(path).and_then(|upload| ingest(&upload));
        outcome.push(name, result);
    }

    info!(
        records = outcome.records.len(),
        failed = outcome.failures.len(),
        "upload batch processed"
    );
    outcome
}
