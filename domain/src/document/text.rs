//! Extracted text value object

use serde::{Deserialize, Serialize};

/// Normalized plain text extracted from a document (Value Object)
///
/// Construction collapses every run of whitespace (newlines included) into a
/// single space and trims both ends, so the invariants hold by construction:
/// the text contains no newline characters and no leading or trailing
/// whitespace. Normalization is a pure function of the input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Normalize raw extractor output into canonical form.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Consume and return the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ExtractedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
