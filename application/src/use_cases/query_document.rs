//! Query document use case
//!
//! Orchestrates one full run: extract text, shape a payload per registered
//! model, invoke each model through the resilient client, and aggregate the
//! keyed outcomes. One model's exhausted retries never abort the others.

use crate::client::ResilientQueryClient;
use crate::ports::extractor::TextExtractor;
use crate::ports::inference::InferenceClient;
use crate::ports::progress::{NoProgress, QueryProgress};
use docquery_domain::{
    Document, FailureKind, ModelRegistry, Question, QueryOutcome, QueryPayload, ResultSet,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Key under which an extraction failure is recorded as the run's single
/// sentinel entry.
pub const EXTRACTION_SENTINEL_KEY: &str = "error";

/// Input for the QueryDocument use case
#[derive(Debug, Clone)]
pub struct QueryDocumentInput {
    /// The source document to extract and dispatch
    pub document: Document,
    /// Per-key payloads that replace the derived ones (used by callers that
    /// shape their own requests)
    pub overrides: HashMap<String, QueryPayload>,
    /// Caller-supplied question for `QuestionContext` models; specs' fixed
    /// questions apply when absent
    pub question: Option<Question>,
}

impl QueryDocumentInput {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            overrides: HashMap::new(),
            question: None,
        }
    }

    pub fn with_override(mut self, key: impl Into<String>, payload: QueryPayload) -> Self {
        self.overrides.insert(key.into(), payload);
        self
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.question = Some(question);
        self
    }
}

/// Use case for running one document against every registered model
pub struct QueryDocumentUseCase<C, E> {
    extractor: Arc<E>,
    client: ResilientQueryClient<C>,
    registry: ModelRegistry,
}

impl<C: InferenceClient, E: TextExtractor> QueryDocumentUseCase<C, E> {
    pub fn new(extractor: Arc<E>, client: ResilientQueryClient<C>, registry: ModelRegistry) -> Self {
        Self {
            extractor,
            client,
            registry,
        }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: QueryDocumentInput) -> ResultSet {
        self.run(input, &NoProgress, &CancellationToken::new()).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: QueryDocumentInput,
        progress: &dyn QueryProgress,
    ) -> ResultSet {
        self.run(input, progress, &CancellationToken::new()).await
    }

    /// Execute with a cancellation token. Cancelling aborts the in-flight
    /// attempt loop - that model records a `Cancelled` failure, outcomes
    /// already recorded are preserved, and remaining models are skipped.
    pub async fn execute_with_cancellation(
        &self,
        input: QueryDocumentInput,
        progress: &dyn QueryProgress,
        token: &CancellationToken,
    ) -> ResultSet {
        self.run(input, progress, token).await
    }

    async fn run(
        &self,
        input: QueryDocumentInput,
        progress: &dyn QueryProgress,
        token: &CancellationToken,
    ) -> ResultSet {
        let mut results = ResultSet::new();

        info!("Extracting text from {}", input.document.path().display());
        let text = match self.extractor.extract(&input.document).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Extraction failed: {}", e);
                results.record(
                    EXTRACTION_SENTINEL_KEY,
                    QueryOutcome::failure(
                        FailureKind::ExtractionFailed,
                        format!("Could not process the document: {}", e),
                        0,
                    ),
                );
                return results;
            }
        };

        info!(
            "Dispatching {} characters to {} models",
            text.len(),
            self.registry.len()
        );
        progress.on_run_start(self.registry.len());

        let question = input.question.as_ref().map(|q| q.content());

        for spec in self.registry.iter() {
            if token.is_cancelled() {
                warn!("Run cancelled before querying {}", spec.key());
                break;
            }

            let payload = match input.overrides.get(spec.key()) {
                Some(payload) => Some(payload.clone()),
                None => spec.shape_payload(text.as_str(), question),
            };
            let Some(payload) = payload else {
                debug!("No payload derivable for {}, skipping", spec.key());
                continue;
            };

            progress.on_model_start(spec.key());
            let outcome = self
                .client
                .invoke_with_cancellation(spec.endpoint(), &payload, token)
                .await;
            progress.on_model_complete(spec.key(), outcome.is_success());

            let cancelled = matches!(
                outcome,
                QueryOutcome::Failure {
                    kind: FailureKind::Cancelled,
                    ..
                }
            );
            results.record(spec.key(), outcome);
            if cancelled {
                break;
            }
        }

        progress.on_run_complete(&results);
        results
    }
}
