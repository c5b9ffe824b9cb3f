//! Inference client port
//!
//! Defines the interface for the remote-call capability: one request to one
//! remote model. Implementations (adapters) live in the infrastructure
//! layer; retry and outcome classification live in
//! [`ResilientQueryClient`](crate::client::ResilientQueryClient).

use async_trait::async_trait;
use docquery_domain::QueryPayload;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during a single remote call
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// The injected remote-call capability.
///
/// One call sends one shaped payload to one remote model identifier and
/// returns the raw JSON response. The capability is read-only shared across
/// all invocations of a run - never mutated.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn call(&self, endpoint: &str, payload: &QueryPayload) -> Result<Value, InferenceError>;
}
