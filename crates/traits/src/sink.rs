//! FileSink trait for accepting generated style-sheet text.
//!
//! The engine never touches the filesystem or a pipeline artifact bundle
//! directly; it hands each generated sheet to a sink.

use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

/// Error type for sink write operations.
#[derive(Error, Debug, Clone)]
pub enum SinkError {
    #[error("Failed to write '{path}': {message}")]
    WriteFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::Io(err.to_string())
    }
}

/// One generated text artifact: a relative directory, a file name (which may
/// itself contain a sub-path such as `themes/dark-theme.scss`), and UTF-8
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub relative_path: String,
    pub file_name: String,
    pub content: String,
}

impl OutputFile {
    pub fn new(
        relative_path: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// A trait for accepting generated files.
///
/// # Implementations
///
/// - `InMemoryFileSink`: collects files in memory (always available)
/// - `FilesystemFileSink`: writes under a base directory
pub trait FileSink: Send + Sync + Debug {
    /// Accept one generated file.
    fn write(&self, file: &OutputFile) -> Result<(), SinkError>;

    /// Returns a human-readable name for this sink (for logging).
    fn name(&self) -> &'static str;
}

/// A sink that collects generated files in memory.
#[derive(Debug, Default)]
pub struct InMemoryFileSink {
    files: RwLock<Vec<OutputFile>>,
}

impl InMemoryFileSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far, in write order.
    pub fn files(&self) -> Vec<OutputFile> {
        self.files.read().map(|files| files.clone()).unwrap_or_default()
    }

    /// Finds a written file by its file name.
    pub fn find(&self, file_name: &str) -> Option<OutputFile> {
        self.files
            .read()
            .ok()?
            .iter()
            .find(|file| file.file_name == file_name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.files.read().map(|files| files.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FileSink for InMemoryFileSink {
    fn write(&self, file: &OutputFile) -> Result<(), SinkError> {
        let mut files = self.files.write().map_err(|_| SinkError::WriteFailed {
            path: file.file_name.clone(),
            message: "sink lock poisoned".to_string(),
        })?;
        files.push(file.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "InMemoryFileSink"
    }
}

/// A sink that writes files under a base directory, creating intermediate
/// directories as needed.
#[derive(Debug)]
pub struct FilesystemFileSink {
    base_dir: PathBuf,
}

impl FilesystemFileSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn target_path(&self, file: &OutputFile) -> PathBuf {
        self.base_dir.join(&file.relative_path).join(&file.file_name)
    }
}

impl FileSink for FilesystemFileSink {
    fn write(&self, file: &OutputFile) -> Result<(), SinkError> {
        let path = self.target_path(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SinkError::WriteFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(&path, &file.content).map_err(|e| SinkError::WriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "FilesystemFileSink"
    }
}
