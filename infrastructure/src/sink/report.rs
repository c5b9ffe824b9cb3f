//! Styled HTML report rendering for result sets

use super::SinkError;
use chrono::Utc;
use docquery_domain::{QueryOutcome, ResultSet};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Renders a [`ResultSet`] as a self-contained Bootstrap-styled document.
///
/// Every attempted model gets a section; failures render in place as alert
/// blocks rather than being omitted.
pub struct HtmlReportSink;

impl HtmlReportSink {
    pub fn write(results: &ResultSet, path: &Path) -> Result<(), SinkError> {
        let html = Self::render(results);
        std::fs::write(path, html).map_err(|e| SinkError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        info!("Results saved to {}", path.display());
        Ok(())
    }

    /// Render the report document.
    pub fn render(results: &ResultSet) -> String {
        let mut out = String::from(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Model Query Results</title>
<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body>
<div class="container mt-5 ml-5 mr-5 mb-5">
    <h1 class="mb-4" style="font-weight: 800;">Model Query Results</h1>
"#,
        );

        for (key, outcome) in results.iter() {
            out.push_str(&format!(
                "<h2 style=\"margin: 50px 5px 5px 10px; font-weight: 600;\">{}</h2>\n",
                escape(&title_case(&key.replace('-', " ")))
            ));
            match outcome {
                QueryOutcome::Failure { message, .. } => {
                    out.push_str(&format!(
                        "<div class=\"alert alert-danger\" role=\"alert\">{}</div>\n",
                        escape(message)
                    ));
                }
                QueryOutcome::Success { body } => Self::render_body(&mut out, body),
            }
        }

        out.push_str(&format!(
            "<p class=\"text-muted mt-5\">Generated {}</p>\n",
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        ));
        out.push_str(
            r#"</div>
<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>
"#,
        );
        out
    }

    fn render_body(out: &mut String, body: &Value) {
        match body {
            // A sequence of mappings renders as one card per item
            Value::Array(items) => {
                for item in items {
                    match item.as_object() {
                        Some(map) => {
                            for (field, val) in map {
                                out.push_str(&format!(
                                    "<div class=\"card mb-3\"><div class=\"card-body\"><h5 class=\"card-title\">{}</h5><p class=\"card-text\">{}</p></div></div>\n",
                                    escape(&title_case(&field.replace('_', " "))),
                                    escape(&display_value(val))
                                ));
                            }
                        }
                        None => {
                            out.push_str(&format!(
                                "<div class=\"card mb-3\"><div class=\"card-body\"><p class=\"card-text\">{}</p></div></div>\n",
                                escape(&display_value(item))
                            ));
                        }
                    }
                }
            }
            // A mapping renders as a field/value list
            Value::Object(map) => {
                out.push_str("<ul class=\"list-group mb-3\">\n");
                for (field, val) in map {
                    out.push_str(&format!(
                        "<li class=\"list-group-item\"><strong>{}:</strong> {}</li>\n",
                        escape(&title_case(field)),
                        escape(&display_value(val))
                    ));
                }
                out.push_str("</ul>\n");
            }
            other => {
                out.push_str(&format!("<p>{}</p>\n", escape(&display_value(other))));
            }
        }
    }
}

/// Strings render bare; everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Uppercase the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use docquery_domain::FailureKind;
    use serde_json::json;

    fn sample() -> ResultSet {
        let mut set = ResultSet::new();
        set.record("fb-bart", QueryOutcome::success(json!([{"summary_text": "a short summary"}])));
        set.record("roberta", QueryOutcome::success(json!({"answer": "Alice", "score": 0.93})));
        set.record(
            "pegasus",
            QueryOutcome::failure(FailureKind::MaxRetriesExceeded, "Max retries reached", 3),
        );
        set
    }

    #[test]
    fn test_every_model_gets_a_section() {
        let html = HtmlReportSink::render(&sample());
        assert!(html.contains("<h2 style=\"margin: 50px 5px 5px 10px; font-weight: 600;\">Fb Bart</h2>"));
        assert!(html.contains("Roberta"));
        assert!(html.contains("Pegasus"));
    }

    #[test]
    fn test_failures_render_as_alert_blocks() {
        let html = HtmlReportSink::render(&sample());
        assert!(html.contains("alert alert-danger"));
        assert!(html.contains("Max retries reached"));
    }

    #[test]
    fn test_sequence_success_renders_cards() {
        let html = HtmlReportSink::render(&sample());
        assert!(html.contains("card-title\">Summary Text</h5>"));
        assert!(html.contains("a short summary"));
    }

    #[test]
    fn test_mapping_success_renders_list_items() {
        let html = HtmlReportSink::render(&sample());
        assert!(html.contains("<strong>Answer:</strong> Alice"));
        assert!(html.contains("<strong>Score:</strong> 0.93"));
    }

    #[test]
    fn test_document_is_self_contained() {
        let html = HtmlReportSink::render(&sample());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("bootstrap.min.css"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_markup_in_values_is_escaped() {
        let mut set = ResultSet::new();
        set.record("m", QueryOutcome::success(json!({"answer": "<script>bad()</script>"})));
        let html = HtmlReportSink::render(&set);
        assert!(!html.contains("<script>bad()"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("fb bart"), "Fb Bart");
        assert_eq!(title_case("summary text"), "Summary Text");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_write_reports_unwritable_destination() {
        let err =
            HtmlReportSink::write(&sample(), Path::new("/nonexistent/dir/report.html")).unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
    }
}
