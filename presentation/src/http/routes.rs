//! Route definitions and handlers for the single-model front end

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use docquery_application::ports::inference::InferenceClient;
use docquery_application::{AskModelError, AskModelInput, AskModelUseCase};
use docquery_domain::{DomainError, Question};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

/// Shared state for the front end
pub struct ApiState<C> {
    pub ask_model: Arc<AskModelUseCase<C>>,
}

impl<C> Clone for ApiState<C> {
    fn clone(&self) -> Self {
        Self {
            ask_model: Arc::clone(&self.ask_model),
        }
    }
}

/// Build the front-end router
pub fn router<C: InferenceClient + 'static>(state: ApiState<C>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate", post(generate::<C>))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Request body for `POST /generate`
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub model_key: Option<String>,
    pub question: Option<String>,
    /// Accepted for wire compatibility; not forwarded.
    #[serde(default)]
    pub parameters: Option<Value>,
}

async fn generate<C: InferenceClient + 'static>(
    State(state): State<ApiState<C>>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let question = request.question.and_then(|q| Question::try_new(q));
    let (Some(model_key), Some(question)) = (request.model_key, question) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing model_key or question");
    };

    match state
        .ask_model
        .execute(AskModelInput::new(model_key, question))
        .await
    {
        Ok(outcome) => {
            let body = serde_json::to_value(&outcome).unwrap_or_else(|_| json!({}));
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(AskModelError::Domain(DomainError::UnknownModelKey(key))) => {
            warn!("Request for unknown model key: {}", key);
            error_response(
                StatusCode::NOT_FOUND,
                &format!("Invalid model_key: {}", key),
            )
        }
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
