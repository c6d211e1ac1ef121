//! HTTP surface: one GET endpoint plus the error-to-response mapping.

use crate::models::QuizResult;
use crate::quiz::QuizOrchestrator;
use crate::Error;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Build the application router. The orchestrator is shared across requests;
/// each request runs its own independent pipeline.
pub fn router(orchestrator: Arc<QuizOrchestrator>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/generate-quiz", get(generate_quiz))
        .layer(cors)
        .with_state(orchestrator)
}

async fn generate_quiz(
    State(orchestrator): State<Arc<QuizOrchestrator>>,
) -> Result<Json<QuizResult>, Error> {
    let result = orchestrator.generate_quiz().await?;
    Ok(Json(result))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let detail = if self.is_provider_error() {
            match &self {
                Error::AiProvider(message) => format!("AI provider error: {}", message),
                other => format!("AI provider error: {}", other),
            }
        } else {
            format!("Unexpected error: {}", self)
        };

        tracing::error!("Quiz generation failed: {}", detail);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}

/// Build the CORS layer from the comma-separated origin list in config.
/// An empty list yields a no-op layer.
pub fn cors_layer(allow_origins: &str) -> CorsLayer {
    let origins = parse_allow_origins(allow_origins);
    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

fn parse_allow_origins(allow_origins: &str) -> Vec<HeaderValue> {
    allow_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect()
}
