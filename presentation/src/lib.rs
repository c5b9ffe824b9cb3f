//! Presentation layer for docquery
//!
//! This crate contains the CLI argument definitions, console output
//! formatting, progress display, and the HTTP front end for single-model
//! queries.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::{Cli, PersistFormat};
pub use http::{router, ApiState};
pub use output::{ConsoleFormatter, OutputFormatter};
pub use progress::{ProgressReporter, SimpleProgress};
