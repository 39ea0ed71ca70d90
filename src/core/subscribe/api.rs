//! Subscribe API endpoints
//!
//! - POST /api/subscribe - Store a lead
//! - GET /api/health - Check the lead store answers

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;

use crate::core::lead::LeadForm;
use crate::core::subscribe::service::{SubscribeError, SubscribeService};
use crate::core::subscribe::store::LeadStore;
use crate::core::validation::FieldErrors;

/// Subscribe API state
#[derive(Clone)]
pub struct SubscribeApiState<S> {
    pub service: SubscribeService<S>,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }
}

impl IntoResponse for SubscribeError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            SubscribeError::Invalid(fields) => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    error: "Missing required fields".to_string(),
                    fields: Some(fields),
                },
            ),
            SubscribeError::DuplicateEmail => {
                (StatusCode::CONFLICT, ApiError::new("Email already exists"))
            }
            SubscribeError::Store(detail) => {
                tracing::error!("Failed to save subscriber: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("Failed to save subscriber"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Successful subscribe response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Create the subscribe API router
pub fn subscribe_router<S: LeadStore>(service: SubscribeService<S>) -> Router {
    let state = Arc::new(SubscribeApiState { service });

    Router::new()
        .route("/api/subscribe", post(subscribe_handler::<S>))
        .route("/api/health", get(health_handler::<S>))
        .with_state(state)
}

/// Body that could not be read as a lead
fn invalid_body(rejection: JsonRejection) -> Response {
    tracing::warn!("Subscribe rejected: {}", rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::new("Invalid request body")),
    )
        .into_response()
}

/// Store a lead
///
/// POST /api/subscribe
async fn subscribe_handler<S: LeadStore>(
    State(state): State<Arc<SubscribeApiState<S>>>,
    payload: Result<Json<LeadForm>, JsonRejection>,
) -> Response {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return invalid_body(rejection),
    };

    tracing::info!("Subscribe attempt for email: {}", form.email.trim());

    match state.service.subscribe(form).await {
        Ok(()) => {
            tracing::info!("Subscriber saved");
            Json(SuccessResponse { success: true }).into_response()
        }
        Err(SubscribeError::DuplicateEmail) => {
            tracing::info!("Subscribe rejected: email already registered");
            SubscribeError::DuplicateEmail.into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Check the lead store
///
/// GET /api/health
async fn health_handler<S: LeadStore>(
    State(state): State<Arc<SubscribeApiState<S>>>,
) -> Response {
    match state.service.health().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response(),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                }),
            )
                .into_response()
        }
    }
}
