//! Document text extraction adapters.
//!
//! [`DocumentTextExtractor`] implements the application's `TextExtractor`
//! port, dispatching on document format to the HTML or PDF converter and
//! normalizing the result.

pub mod html;
pub mod pdf;

use async_trait::async_trait;
use docquery_application::ports::extractor::{ExtractionError, TextExtractor};
use docquery_domain::{Document, DocumentFormat, ExtractedText};
use tracing::debug;

/// Filesystem-backed text extractor for HTML and PDF documents.
pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        // Reads the whole file in one scoped call; no handle outlives it.
        let bytes = tokio::fs::read(document.path())
            .await
            .map_err(|e| ExtractionError::Unreadable {
                path: document.path().display().to_string(),
                reason: e.to_string(),
            })?;

        let raw = match document.format() {
            DocumentFormat::Html => html::html_to_text(&String::from_utf8_lossy(&bytes)),
            DocumentFormat::Pdf => pdf::pdf_to_text(&bytes)?,
        };

        let text = ExtractedText::normalize(&raw);
        debug!(
            "Extracted {} characters from {}",
            text.len(),
            document.path().display()
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    async fn extract_html(markup: &str) -> Result<ExtractedText, ExtractionError> {
        let mut file = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
        file.write_all(markup.as_bytes()).unwrap();
        let document = Document::from_path(file.path()).unwrap();
        DocumentTextExtractor.extract(&document).await
    }

    #[tokio::test]
    async fn test_html_extraction_normalizes_whitespace() {
        let text = extract_html("<p>Alice\n\n   met</p>\n<p>Bob.</p>")
            .await
            .unwrap();
        assert_eq!(text.as_str(), "Alice met Bob.");
    }

    #[tokio::test]
    async fn test_extraction_is_deterministic() {
        let markup = "<h1>Title</h1><p>Body   text</p>";
        let first = extract_html(markup).await.unwrap();
        let second = extract_html(markup).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_no_newline_invariant_holds() {
        let text = extract_html("<p>one</p>\n<p>two</p>\n<p>three</p>")
            .await
            .unwrap();
        assert!(!text.as_str().contains('\n'));
        assert_eq!(text.as_str(), text.as_str().trim());
    }

    #[tokio::test]
    async fn test_missing_file_is_unreadable_not_a_panic() {
        let document = Document::from_path("/nonexistent/input.html").unwrap();
        let err = DocumentTextExtractor.extract(&document).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Unreadable { .. }));
    }

    #[tokio::test]
    async fn test_pdf_extraction_end_to_end() {
        let bytes = pdf::tests::make_test_pdf("Quarterly report for Alice");
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(&bytes).unwrap();
        let document = Document::from_path(file.path()).unwrap();

        let text = DocumentTextExtractor.extract(&document).await.unwrap();
        assert!(!text.as_str().contains('\n'));
        assert!(text.as_str().contains("Alice"));
    }
}
