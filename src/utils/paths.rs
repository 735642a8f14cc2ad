use std::env;
use std::fs::File;
use std::path::Path;

use crate::parsers::IngestError;

// Maximum size of a single uploaded transcript: 10MB
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that an open upload is within the size limit (10MB)
///
/// Takes the open handle so the file cannot be swapped between the check and the read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<(), IngestError> {
    let metadata =
        file.metadata().map_err(|source| IngestError::Io { path: path.to_path_buf(), source })?;

    let size = metadata.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(IngestError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_UPLOAD_BYTES,
        });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy().into_owned();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    path_str
}
