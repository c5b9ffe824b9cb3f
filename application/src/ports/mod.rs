//! Ports - interfaces implemented by infrastructure and presentation.

pub mod extractor;
pub mod inference;
pub mod progress;

pub use extractor::{ExtractionError, TextExtractor};
pub use inference::{InferenceClient, InferenceError};
pub use progress::{NoProgress, QueryProgress};
