//! Shaped request payloads

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

/// A shaped request body for one model invocation.
///
/// The wire form follows the inference provider's conventions:
/// `RawText` serializes to `{"inputs": <text>}` and `QuestionContext`
/// to `{"inputs": {"question": <q>, "context": <text>}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPayload {
    RawText {
        inputs: String,
    },
    QuestionContext {
        question: String,
        context: String,
    },
}

impl QueryPayload {
    pub fn raw_text(inputs: impl Into<String>) -> Self {
        QueryPayload::RawText {
            inputs: inputs.into(),
        }
    }

    pub fn question_context(question: impl Into<String>, context: impl Into<String>) -> Self {
        QueryPayload::QuestionContext {
            question: question.into(),
            context: context.into(),
        }
    }

    /// The wire-format JSON body for this payload.
    pub fn to_value(&self) -> Value {
        match self {
            QueryPayload::RawText { inputs } => json!({ "inputs": inputs }),
            QueryPayload::QuestionContext { question, context } => json!({
                "inputs": { "question": question, "context": context }
            }),
        }
    }
}

impl Serialize for QueryPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for QueryPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let inputs = value
            .get("inputs")
            .ok_or_else(|| D::Error::custom("payload is missing the inputs field"))?;

        match inputs {
            Value::String(s) => Ok(QueryPayload::raw_text(s.clone())),
            Value::Object(map) => {
                let question = map
                    .get("question")
                    .and_then(Value::as_str)
                    .ok_or_else(|| D::Error::custom("inputs object is missing question"))?;
                let context = map
                    .get("context")
                    .and_then(Value::as_str)
                    .ok_or_else(|| D::Error::custom("inputs object is missing context"))?;
                Ok(QueryPayload::question_context(question, context))
            }
            _ => Err(D::Error::custom("inputs must be a string or an object")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text_wire_form() {
        let payload = QueryPayload::raw_text("Alice met Bob.");
        assert_eq!(payload.to_value(), json!({"inputs": "Alice met Bob."}));
    }

    #[test]
    fn test_question_context_wire_form() {
        let payload = QueryPayload::question_context("Who is mentioned?", "Alice met Bob.");
        assert_eq!(
            payload.to_value(),
            json!({"inputs": {"question": "Who is mentioned?", "context": "Alice met Bob."}})
        );
    }

    #[test]
    fn test_payload_roundtrip() {
        for payload in [
            QueryPayload::raw_text("some text"),
            QueryPayload::question_context("q", "c"),
        ] {
            let s = serde_json::to_string(&payload).unwrap();
            let parsed: QueryPayload = serde_json::from_str(&s).unwrap();
            assert_eq!(payload, parsed);
        }
    }

    #[test]
    fn test_deserialize_rejects_missing_inputs() {
        let result: Result<QueryPayload, _> = serde_json::from_value(json!({"text": "x"}));
        assert!(result.is_err());
    }
}
