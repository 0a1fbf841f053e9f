use std::fmt;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::validation::ValidationIssue;

/// Unified error type for the JSON-accepting handlers.
///
/// Each variant maps to an HTTP status code and produces a JSON response
/// body of the form `{"error": "<message>"}`, with an extra `details` array
/// for payload validation failures. Internal errors carry their cause for
/// logging only; it never reaches the response.
#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    UnsupportedMediaType,
    InvalidPayload(Vec<ValidationIssue>),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            ApiError::UnsupportedMediaType => write!(f, "Unsupported Media Type"),
            ApiError::InvalidPayload(issues) => {
                write!(f, "Invalid payload: {} issue(s)", issues.len())
            }
            ApiError::Internal(msg) => write!(f, "Internal Server Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("serialization error: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MethodNotAllowed => {
                let mut response = (
                    StatusCode::METHOD_NOT_ALLOWED,
                    Json(json!({ "error": "Method Not Allowed" })),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static("POST"));
                response
            }
            ApiError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(json!({ "error": "Unsupported Media Type" })),
            )
                .into_response(),
            ApiError::InvalidPayload(issues) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid payload", "details": issues })),
            )
                .into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Failure of the outbound call made by the product proxy.
///
/// There is no recovery for these: the invocation is reported as failed with
/// a bare 500, the same thing the hosting runtime shows for a crashed function.
#[derive(Debug)]
pub enum UpstreamError {
    Transport(reqwest::Error),
    Decode(reqwest::Error),
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Transport(e) => write!(f, "upstream request failed: {e}"),
            UpstreamError::Decode(e) => write!(f, "upstream body is not JSON: {e}"),
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Transport(e) | UpstreamError::Decode(e) => Some(e),
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "product proxy invocation failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
