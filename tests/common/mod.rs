//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Bytes that are not valid UTF-8
pub const INVALID_UTF8: &[u8] = &[0xff, 0xfe, 0xfd, b'a'];

/// Builder for a directory of exported transcripts
pub struct UploadDirBuilder {
    temp_dir: TempDir,
    files: Vec<PathBuf>,
}

impl UploadDirBuilder {
    /// Create a new builder with an empty directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, files: Vec::new() }
    }

    /// Add a text file with the given name and content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.with_bytes(name, content.as_bytes())
    }

    /// Add a file with raw bytes (for decode failures)
    pub fn with_bytes(mut self, name: &str, bytes: &[u8]) -> Self {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, bytes).expect("Failed to write upload file");
        self.files.push(path);
        self
    }

    /// Directory holding the files
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// File paths in the order they were added
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Path of a config file inside the directory (not created)
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    /// Write a config file and return its path
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.config_path();
        fs::write(&path, content).expect("Failed to write config file");
        path
    }
}

impl Default for UploadDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Three transcripts, one per detection path: file name, file name, content keyword
pub fn standard_uploads() -> UploadDirBuilder {
    UploadDirBuilder::new()
        .with_file("gemini-pt.md", "PT 등록 논의\n주 3회 PT 등록 예정")
        .with_file("claude-admin.md", "관리자페이지 작업 정리")
        .with_file("notes.txt", "Grok 마케팅 아이디어: PT 홍보 이벤트")
}
