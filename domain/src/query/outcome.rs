//! Query outcomes - the terminal result of one model invocation

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

/// Why a model invocation terminally failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// Every attempt was retryable and the retry budget ran out.
    MaxRetriesExceeded,
    /// The document yielded no text, so no model was invoked.
    ExtractionFailed,
    /// The caller aborted the attempt loop.
    Cancelled,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::MaxRetriesExceeded => write!(f, "max retries exceeded"),
            FailureKind::ExtractionFailed => write!(f, "extraction failed"),
            FailureKind::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Terminal result of one model invocation.
///
/// Produced exactly once at the resilient-client boundary; downstream code
/// (orchestrator, sinks, formatters) never re-inspects raw responses.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Success {
        /// The provider's response body, verbatim.
        body: Value,
    },
    Failure {
        kind: FailureKind,
        message: String,
        /// Attempts consumed before giving up.
        attempts: u32,
    },
}

impl QueryOutcome {
    pub fn success(body: Value) -> Self {
        QueryOutcome::Success { body }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>, attempts: u32) -> Self {
        QueryOutcome::Failure {
            kind,
            message: message.into(),
            attempts,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Success { .. })
    }

    /// The success body, if any.
    pub fn body(&self) -> Option<&Value> {
        match self {
            QueryOutcome::Success { body } => Some(body),
            QueryOutcome::Failure { .. } => None,
        }
    }

    /// The failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            QueryOutcome::Success { .. } => None,
            QueryOutcome::Failure { message, .. } => Some(message),
        }
    }
}

impl Serialize for QueryOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            QueryOutcome::Success { body } => body.serialize(serializer),
            QueryOutcome::Failure {
                kind,
                message,
                attempts,
            } => json!({
                "error": message,
                "kind": kind,
                "attempts": attempts,
            })
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for QueryOutcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        // A mapping carrying a string `error` field is the failure form;
        // anything else is a success body taken verbatim.
        if let Some(map) = value.as_object() {
            if let Some(message) = map.get("error").and_then(Value::as_str) {
                let kind = match map.get("kind") {
                    Some(k) => serde_json::from_value(k.clone()).map_err(D::Error::custom)?,
                    None => FailureKind::MaxRetriesExceeded,
                };
                let attempts = map
                    .get("attempts")
                    .and_then(Value::as_u64)
                    .unwrap_or(0) as u32;
                return Ok(QueryOutcome::failure(kind, message, attempts));
            }
        }

        Ok(QueryOutcome::success(value))
    }
}
