use std::path::PathBuf;

/// Per-file ingestion failure. A batch records these and keeps going.
#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("{file}: content is not valid UTF-8 text ({source})")]
    Read {
        file: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("{}: failed to read file ({source})", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: file too large ({size} bytes, max {max} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("{}: unsupported extension (expected .json, .md or .txt)", path.display())]
    UnsupportedExtension { path: PathBuf },
}

impl IngestError {
    /// Name shown in status messages for the failed file
    pub fn file_name(&self) -> String {
        match self {
            IngestError::Read { file, .. } => file.clone(),
            IngestError::Io { path, .. }
            | IngestError::TooLarge { path, .. }
            | IngestError::UnsupportedExtension { path } => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}
