//! Model specifications and payload shaping

use crate::query::payload::QueryPayload;
use serde::{Deserialize, Serialize};

/// Rule describing how extracted text is packaged into a request body
/// for a given model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadShape {
    /// The text is sent verbatim as the `inputs` field.
    RawText,
    /// The text becomes the `context` of a question/context pair.
    QuestionContext,
}

/// Specification of one remotely addressable model.
///
/// The logical `key` is the stable identifier used throughout the system;
/// `endpoint` is the remote model identifier understood by the inference
/// provider. Immutable once the registry is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    key: String,
    endpoint: String,
    shape: PayloadShape,
    /// Fixed question used by `QuestionContext` models when the caller
    /// supplies none.
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<String>,
}

impl ModelSpec {
    pub fn new(
        key: impl Into<String>,
        endpoint: impl Into<String>,
        shape: PayloadShape,
    ) -> Self {
        Self {
            key: key.into(),
            endpoint: endpoint.into(),
            shape,
            question: None,
        }
    }

    /// Attach the fixed question for a `QuestionContext` model.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn shape(&self) -> PayloadShape {
        self.shape
    }

    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    /// Build the request payload for this model from extracted text.
    ///
    /// Pure function: no side effects, no network access. For
    /// `QuestionContext` specs the caller-supplied question wins over the
    /// spec's fixed one; with neither, no payload is derivable and `None`
    /// is returned.
    pub fn shape_payload(&self, text: &str, question: Option<&str>) -> Option<QueryPayload> {
        match self.shape {
            PayloadShape::RawText => Some(QueryPayload::raw_text(text)),
            PayloadShape::QuestionContext => {
                let q = question.or(self.question.as_deref())?;
                Some(QueryPayload::question_context(q, text))
            }
        }
    }
}
