use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::config::Environment;

/// Error responses of the contact endpoint. Each variant owns its wire
/// shape; raw store or framework errors never reach the client.
#[derive(Debug)]
pub enum ApiError {
    /// Field-level failures, fully recoverable by the user.
    Validation(BTreeMap<&'static str, String>),
    /// Operator problem (missing or rejected store credential). The body
    /// is generic on purpose; the full detail goes to the server log.
    Configuration,
    /// The store write failed. The user is told to retry or use a direct
    /// channel; nothing is retried automatically.
    Persistence,
    /// Anything uncaught. `detail` is only populated outside production.
    Unexpected { detail: Option<String> },
}

impl ApiError {
    pub fn unexpected(environment: Environment, detail: impl Into<String>) -> Self {
        let detail = if environment.is_production() {
            None
        } else {
            Some(detail.into())
        };
        ApiError::Unexpected { detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Please check your form and try again.",
                    "errors": errors,
                })),
            )
                .into_response(),
            ApiError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Server configuration error. Please contact support.",
                    "details": "Content store write permissions are not configured correctly.",
                })),
            )
                .into_response(),
            ApiError::Persistence => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to save your request. Please try again or contact us directly.",
                })),
            )
                .into_response(),
            ApiError::Unexpected { detail } => {
                let mut body = json!({
                    "error": "An unexpected error occurred. Please try again later or contact us directly.",
                });
                if let Some(detail) = detail {
                    body["details"] = json!(detail);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
