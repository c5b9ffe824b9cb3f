//! Resilient query client - bounded retries around the inference port.
//!
//! Every code path terminates in a [`QueryOutcome`] value; no fault from the
//! remote call propagates past this boundary. Downstream code never
//! re-inspects raw responses - classification happens exactly once, here.

use crate::ports::inference::InferenceClient;
use crate::retry::RetryPolicy;
use docquery_domain::{FailureKind, QueryOutcome, QueryPayload};
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Invokes one remote model with bounded retry and a fixed backoff interval.
pub struct ResilientQueryClient<C> {
    client: Arc<C>,
    policy: RetryPolicy,
}

impl<C> Clone for ResilientQueryClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            policy: self.policy,
        }
    }
}

impl<C: InferenceClient> ResilientQueryClient<C> {
    pub fn new(client: Arc<C>, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Invoke `endpoint` with `payload`, retrying retryable outcomes up to
    /// the policy's attempt budget.
    pub async fn invoke(&self, endpoint: &str, payload: &QueryPayload) -> QueryOutcome {
        self.invoke_with_cancellation(endpoint, payload, &CancellationToken::new())
            .await
    }

    /// Cancellation-aware variant: aborting the token stops the attempt loop
    /// (including a backoff wait in progress) and yields a `Cancelled`
    /// failure carrying the attempts consumed so far.
    pub async fn invoke_with_cancellation(
        &self,
        endpoint: &str,
        payload: &QueryPayload,
        token: &CancellationToken,
    ) -> QueryOutcome {
        let mut attempt = 0;
        let mut last_error = String::from("no attempts made");

        while attempt < self.policy.max_attempts {
            if token.is_cancelled() {
                return QueryOutcome::failure(FailureKind::Cancelled, "operation cancelled", attempt);
            }
            attempt += 1;
            debug!("Attempting to query {}, attempt {}", endpoint, attempt);

            match self.client.call(endpoint, payload).await {
                Ok(body) => match classify_response(body) {
                    Ok(body) => return QueryOutcome::success(body),
                    Err(reason) => last_error = reason,
                },
                Err(e) => last_error = e.to_string(),
            }

            warn!("Error querying {}: {}", endpoint, last_error);

            if attempt < self.policy.max_attempts {
                tokio::select! {
                    _ = token.cancelled() => {
                        return QueryOutcome::failure(
                            FailureKind::Cancelled,
                            "operation cancelled",
                            attempt,
                        );
                    }
                    _ = tokio::time::sleep(self.policy.backoff) => {}
                }
            }
        }

        warn!("Max retries reached for {}", endpoint);
        QueryOutcome::failure(
            FailureKind::MaxRetriesExceeded,
            format!("Max retries reached with error: {}", last_error),
            self.policy.max_attempts,
        )
    }
}

/// Classify one attempt's response body.
///
/// A mapping with an `error` field is retryable, as is a mapping whose
/// `status` field is present and not 200 - a `status`-free body is success.
/// Everything else passes through verbatim.
fn classify_response(body: Value) -> Result<Value, String> {
    if let Some(map) = body.as_object() {
        if let Some(err) = map.get("error") {
            let message = err
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| err.to_string());
            return Err(format!("Received error response: {}", message));
        }
        if let Some(status) = map.get("status") {
            if status.as_i64() != Some(200) {
                return Err(format!("Received non-200 status: {}", status));
            }
        }
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inference::InferenceError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Stub client that runs through a scripted sequence of responses,
    /// repeating the last entry once the script is exhausted.
    struct ScriptedClient {
        script: Vec<Result<Value, ()>>,
        calls: AtomicU32,
    }

    impl ScriptedClient {
        fn new(script: Vec<Result<Value, ()>>) -> Self {
            Self {
                script,
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl InferenceClient for ScriptedClient {
        async fn call(
            &self,
            _endpoint: &str,
            _payload: &QueryPayload,
        ) -> Result<Value, InferenceError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
            let step = self.script.get(n).or_else(|| self.script.last()).unwrap();
            match step {
                Ok(v) => Ok(v.clone()),
                Err(()) => Err(InferenceError::Transport("connection refused".to_string())),
            }
        }
    }

    fn payload() -> QueryPayload {
        QueryPayload::raw_text("Alice met Bob.")
    }

    #[tokio::test]
    async fn test_retry_bound_on_transport_failure() {
        let stub = Arc::new(ScriptedClient::new(vec![Err(())]));
        let client = ResilientQueryClient::new(Arc::clone(&stub), RetryPolicy::no_backoff(3));

        let outcome = client.invoke("m", &payload()).await;

        assert_eq!(stub.calls(), 3);
        match outcome {
            QueryOutcome::Failure {
                kind, attempts, message,
            } => {
                assert_eq!(kind, FailureKind::MaxRetriesExceeded);
                assert_eq!(attempts, 3);
                assert!(message.contains("connection refused"));
            }
            QueryOutcome::Success { .. } => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_error_field_is_retryable() {
        let stub = Arc::new(ScriptedClient::new(vec![Ok(json!({"error": "model loading"}))]));
        let client = ResilientQueryClient::new(Arc::clone(&stub), RetryPolicy::no_backoff(2));

        let outcome = client.invoke("m", &payload()).await;

        assert_eq!(stub.calls(), 2);
        assert!(!outcome.is_success());
        assert!(outcome.error_message().unwrap().contains("model loading"));
    }

    #[tokio::test]
    async fn test_early_success_stops_attempts() {
        let stub = Arc::new(ScriptedClient::new(vec![
            Err(()),
            Ok(json!([{"summary_text": "ok"}])),
        ]));
        let client = ResilientQueryClient::new(Arc::clone(&stub), RetryPolicy::no_backoff(3));

        let outcome = client.invoke("m", &payload()).await;

        assert_eq!(stub.calls(), 2, "no third attempt after success");
        assert!(outcome.is_success());
        assert_eq!(outcome.body().unwrap(), &json!([{"summary_text": "ok"}]));
    }

    #[tokio::test]
    async fn test_non_200_status_field_is_retryable() {
        let stub = Arc::new(ScriptedClient::new(vec![Ok(json!({"status": 503}))]));
        let client = ResilientQueryClient::new(Arc::clone(&stub), RetryPolicy::no_backoff(2));

        let outcome = client.invoke("m", &payload()).await;

        assert_eq!(stub.calls(), 2);
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_status_200_and_absent_status_succeed() {
        for body in [json!({"status": 200, "data": 1}), json!({"answer": "Alice"})] {
            let stub = Arc::new(ScriptedClient::new(vec![Ok(body.clone())]));
            let client = ResilientQueryClient::new(Arc::clone(&stub), RetryPolicy::no_backoff(3));

            let outcome = client.invoke("m", &payload()).await;

            assert_eq!(stub.calls(), 1);
            assert_eq!(outcome.body().unwrap(), &body);
        }
    }

    #[tokio::test]
    async fn test_non_mapping_bodies_succeed() {
        let stub = Arc::new(ScriptedClient::new(vec![Ok(json!(["a", "b"]))]));
        let client = ResilientQueryClient::new(Arc::clone(&stub), RetryPolicy::no_backoff(3));

        let outcome = client.invoke("m", &payload()).await;
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let stub = Arc::new(ScriptedClient::new(vec![Err(())]));
        let client = ResilientQueryClient::new(Arc::clone(&stub), RetryPolicy::no_backoff(3));

        let token = CancellationToken::new();
        token.cancel();
        let outcome = client
            .invoke_with_cancellation("m", &payload(), &token)
            .await;

        assert_eq!(stub.calls(), 0);
        match outcome {
            QueryOutcome::Failure { kind, attempts, .. } => {
                assert_eq!(kind, FailureKind::Cancelled);
                assert_eq!(attempts, 0);
            }
            QueryOutcome::Success { .. } => panic!("expected cancellation"),
        }
    }
}
