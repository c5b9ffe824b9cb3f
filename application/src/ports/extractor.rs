//! Text extractor port

use async_trait::async_trait;
use docquery_domain::{Document, ExtractedText};
use thiserror::Error;

/// Errors that can occur while turning a document into plain text.
///
/// Raw I/O faults never cross this boundary; unreadable input surfaces as
/// [`ExtractionError::Unreadable`] with the path and reason.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Failed to parse document: {0}")]
    Parse(String),
}

/// Converts a source document into normalized plain text.
///
/// Extraction is a pure function of the document bytes: identical bytes
/// produce identical text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError>;
}
