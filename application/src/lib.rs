//! Application layer for docquery
//!
//! This crate contains use cases, port definitions, the retry policy and
//! the resilient query client. It depends only on the domain layer.

pub mod client;
pub mod ports;
pub mod retry;
pub mod use_cases;

// Re-export commonly used types
pub use client::ResilientQueryClient;
pub use ports::{
    extractor::{ExtractionError, TextExtractor},
    inference::{InferenceClient, InferenceError},
    progress::{NoProgress, QueryProgress},
};
pub use retry::RetryPolicy;
pub use use_cases::ask_model::{AskModelError, AskModelInput, AskModelUseCase};
pub use use_cases::query_document::{
    QueryDocumentInput, QueryDocumentUseCase, EXTRACTION_SENTINEL_KEY,
};
