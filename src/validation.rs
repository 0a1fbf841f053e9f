use axum::http::{header, HeaderMap, Method};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    InvalidJson,
}

/// A single shape violation found in a request payload.
///
/// Serialized as-is into the `details` array of a 400 response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<&'static str>,
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    /// Wrong type at `path`. A `None` value means the field was missing.
    pub fn invalid_type(path: &[&str], expected: &'static str, found: Option<&Value>) -> Self {
        let received = found.map_or("undefined", type_name);
        let message = if found.is_none() {
            "Required".to_string()
        } else {
            format!("Expected {expected}, received {received}")
        };

        Self {
            code: IssueCode::InvalidType,
            expected: Some(expected),
            received: Some(received),
            path: path.iter().map(|p| p.to_string()).collect(),
            message,
        }
    }

    pub fn invalid_json(err: &serde_json::Error) -> Self {
        Self {
            code: IssueCode::InvalidJson,
            expected: None,
            received: None,
            path: Vec::new(),
            message: format!("Malformed JSON body: {err}"),
        }
    }
}

/// A request payload shape that can be checked against an untyped JSON body.
///
/// `body` is `None` when the request carried no body at all. Fields not named
/// by the shape are ignored.
pub trait Schema: Sized {
    fn check(body: Option<&Value>) -> Result<Self, Vec<ValidationIssue>>;
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require the payload root to be a JSON object.
pub fn expect_object(body: Option<&Value>) -> Result<&Map<String, Value>, Vec<ValidationIssue>> {
    match body {
        Some(Value::Object(map)) => Ok(map),
        other => Err(vec![ValidationIssue::invalid_type(&[], "object", other)]),
    }
}

pub fn optional_string(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, ValidationIssue> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ValidationIssue::invalid_type(&[field], "string", Some(other))),
    }
}

pub fn required_string(object: &Map<String, Value>, field: &str) -> Result<String, ValidationIssue> {
    optional_string(object, field)?
        .ok_or_else(|| ValidationIssue::invalid_type(&[field], "string", None))
}

/// Parse raw body bytes and check them against `T`.
///
/// An empty or whitespace-only body is treated as absent.
pub fn parse_payload<T: Schema>(bytes: &[u8]) -> Result<T, Vec<ValidationIssue>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return T::check(None);
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| vec![ValidationIssue::invalid_json(&e)])?;
    T::check(Some(&value))
}

/// Method and media-type gate shared by the JSON handlers.
///
/// Only `POST` with a `Content-Type` containing `application/json` passes.
pub fn require_json_post(method: &Method, headers: &HeaderMap) -> Result<(), ApiError> {
    if *method != Method::POST {
        tracing::debug!(%method, "rejecting non-POST request");
        return Err(ApiError::MethodNotAllowed);
    }

    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));

    if !is_json {
        tracing::debug!("rejecting request without a JSON content type");
        return Err(ApiError::UnsupportedMediaType);
    }

    Ok(())
}
