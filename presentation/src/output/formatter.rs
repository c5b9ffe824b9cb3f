//! Output formatter trait

use docquery_domain::ResultSet;

/// Trait for formatting aggregated results
pub trait OutputFormatter {
    /// Format the complete result set for display
    fn format(&self, results: &ResultSet) -> String;

    /// Format as JSON
    fn format_json(&self, results: &ResultSet) -> String;
}
