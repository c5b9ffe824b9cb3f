//! Console output formatter for aggregated results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use docquery_domain::{QueryOutcome, ResultSet};
use serde_json::Value;

/// Formats result sets for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result set
    pub fn format(results: &ResultSet) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Model Query Results"));
        output.push('\n');

        for (key, outcome) in results.iter() {
            match outcome {
                QueryOutcome::Success { body } => {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── {} ──", key).yellow().bold(),
                        Self::preview(body)
                    ));
                }
                QueryOutcome::Failure {
                    message, attempts, ..
                } => {
                    output.push_str(&format!(
                        "\n{}\nError after {} attempt(s): {}\n",
                        format!("── {} ──", key).red().bold(),
                        attempts,
                        message
                    ));
                }
            }
        }

        output.push_str(&format!(
            "\n{} {} succeeded, {} failed\n",
            "Summary:".cyan().bold(),
            results.successes().count(),
            results.failures().count()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(results: &ResultSet) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "{}".to_string())
    }

    fn preview(body: &Value) -> String {
        serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, results: &ResultSet) -> String {
        Self::format(results)
    }

    fn format_json(&self, results: &ResultSet) -> String {
        Self::format_json(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docquery_domain::FailureKind;
    use serde_json::json;

    fn sample() -> ResultSet {
        let mut set = ResultSet::new();
        set.record("fb-bart", QueryOutcome::success(json!([{"summary_text": "s"}])));
        set.record(
            "falcon",
            QueryOutcome::failure(FailureKind::MaxRetriesExceeded, "timed out", 3),
        );
        set
    }

    #[test]
    fn test_format_shows_every_model() {
        let output = ConsoleFormatter::format(&sample());
        assert!(output.contains("fb-bart"));
        assert!(output.contains("falcon"));
        assert!(output.contains("timed out"));
    }

    #[test]
    fn test_format_counts_outcomes() {
        let output = ConsoleFormatter::format(&sample());
        assert!(output.contains("1 succeeded, 1 failed"));
    }

    #[test]
    fn test_format_json_is_parseable() {
        let output = ConsoleFormatter::format_json(&sample());
        let value: Value = serde_json::from_str(&output).unwrap();
        assert!(value.get("fb-bart").is_some());
    }
}
