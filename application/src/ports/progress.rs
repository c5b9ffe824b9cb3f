//! Progress notification port
//!
//! Defines the interface for reporting progress during an orchestration run.

use docquery_domain::ResultSet;

/// Callback for progress updates while models are queried
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bars, etc.)
pub trait QueryProgress: Send + Sync {
    /// Called once after extraction succeeds, before any model is queried
    fn on_run_start(&self, total_models: usize);

    /// Called when a model's invocation begins
    fn on_model_start(&self, key: &str);

    /// Called when a model's outcome has been recorded
    fn on_model_complete(&self, key: &str, success: bool);

    /// Called once with the accumulated results
    fn on_run_complete(&self, results: &ResultSet);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl QueryProgress for NoProgress {
    fn on_run_start(&self, _total_models: usize) {}
    fn on_model_start(&self, _key: &str) {}
    fn on_model_complete(&self, _key: &str, _success: bool) {}
    fn on_run_complete(&self, _results: &ResultSet) {}
}
