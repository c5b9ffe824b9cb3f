//! PDF to text conversion

use docquery_application::ports::extractor::ExtractionError;

/// Extract text from a PDF, page by page in document order.
///
/// Page texts are joined with single spaces; final whitespace normalization
/// happens in `ExtractedText`. Handles digital PDFs with embedded text
/// layers; scanned pages yield empty text rather than an error.
pub fn pdf_to_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        .map_err(|e| ExtractionError::Parse(e.to_string()))?;

    Ok(pages.join(" "))
}
