//! Source documents and the text extracted from them.
//!
//! - [`Document`] — a filesystem-referenced source document with its format
//! - [`DocumentFormat`] — the supported input formats
//! - [`text::ExtractedText`] — normalized plain text derived from a document

pub mod text;

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Supported input document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Html,
    Pdf,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "html" | "htm" => Ok(DocumentFormat::Html),
            "pdf" => Ok(DocumentFormat::Pdf),
            _ => Err(DomainError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Html => write!(f, "html"),
            DocumentFormat::Pdf => write!(f, "pdf"),
        }
    }
}

/// A source document referenced by filesystem path.
///
/// Immutable once created; consumed exactly once by a text extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    format: DocumentFormat,
}

impl Document {
    /// Create a document with an explicit format.
    pub fn new(path: impl Into<PathBuf>, format: DocumentFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Create a document, detecting the format from the file extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let format = DocumentFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }
}
