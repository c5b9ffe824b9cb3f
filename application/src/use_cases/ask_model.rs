//! Ask model use case
//!
//! Single-model query path used by the HTTP front end: resolve the logical
//! key, shape the payload from the caller's text, invoke the resilient
//! client and return the outcome.

use crate::client::ResilientQueryClient;
use crate::ports::inference::InferenceClient;
use docquery_domain::{DomainError, ModelRegistry, Question, QueryOutcome};
use thiserror::Error;
use tracing::info;

/// Errors that can occur before an invocation is attempted
#[derive(Error, Debug)]
pub enum AskModelError {
    /// The requested key is absent from the registry - never defaulted.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No payload can be derived for model {0}")]
    UnderivablePayload(String),
}

/// Input for the AskModel use case
#[derive(Debug, Clone)]
pub struct AskModelInput {
    pub model_key: String,
    /// The caller's text; becomes the raw input or the QA context per the
    /// model's payload shape.
    pub question: Question,
}

impl AskModelInput {
    pub fn new(model_key: impl Into<String>, question: impl Into<Question>) -> Self {
        Self {
            model_key: model_key.into(),
            question: question.into(),
        }
    }
}

/// Use case for querying one model by logical key
pub struct AskModelUseCase<C> {
    client: ResilientQueryClient<C>,
    registry: ModelRegistry,
}

impl<C: InferenceClient> AskModelUseCase<C> {
    pub fn new(client: ResilientQueryClient<C>, registry: ModelRegistry) -> Self {
        Self { client, registry }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub async fn execute(&self, input: AskModelInput) -> Result<QueryOutcome, AskModelError> {
        let spec = self.registry.resolve(&input.model_key)?;
        let payload = spec
            .shape_payload(input.question.content(), None)
            .ok_or_else(|| AskModelError::UnderivablePayload(input.model_key.clone()))?;

        info!("Querying model {} ({})", spec.key(), spec.endpoint());
        Ok(self.client.invoke(spec.endpoint(), &payload).await)
    }
}
