//! Result sinks - durable forms of an aggregated result set.

pub mod json;
pub mod report;

use thiserror::Error;

pub use json::JsonSink;
pub use report::HtmlReportSink;

/// Errors that can occur while persisting a result set
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}
