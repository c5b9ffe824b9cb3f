//! Progress display implementations.

pub mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};
