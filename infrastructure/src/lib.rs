//! Infrastructure layer for docquery
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Hugging Face inference client, the document text
//! extractors, configuration file loading, and the result sinks.

pub mod config;
pub mod extraction;
pub mod hf;
pub mod sink;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileModelConfig};
pub use extraction::DocumentTextExtractor;
pub use hf::{HfInferenceClient, DEFAULT_API_URL};
pub use sink::{HtmlReportSink, JsonSink, SinkError};
