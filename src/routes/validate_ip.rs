use axum::{
    body::Bytes,
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::ApiError,
    validation::{
        expect_object, parse_payload, require_json_post, required_string, Schema, ValidationIssue,
    },
};

#[derive(Debug, PartialEq)]
pub struct IpPayload {
    pub ip: String,
}

impl Schema for IpPayload {
    fn check(body: Option<&Value>) -> Result<Self, Vec<ValidationIssue>> {
        let object = expect_object(body)?;
        let ip = required_string(object, "ip").map_err(|issue| vec![issue])?;
        Ok(Self { ip })
    }
}

#[derive(Debug, Serialize)]
pub struct ValidIpResponse {
    pub message: &'static str,
    pub ip: String,
}

pub async fn handler(method: Method, headers: HeaderMap, body: Bytes) -> Response {
    match try_validate(&method, &headers, &body) {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

fn try_validate(method: &Method, headers: &HeaderMap, body: &[u8]) -> Result<Response, ApiError> {
    require_json_post(method, headers)?;

    // Shape only: the string is not checked for IP address syntax
    let payload = parse_payload::<IpPayload>(body).map_err(|issues| {
        tracing::debug!(issues = issues.len(), "invalid IP payload");
        ApiError::InvalidPayload(issues)
    })?;

    let response = ValidIpResponse {
        message: "Valid IP received",
        ip: payload.ip,
    };

    Ok(Json(serde_json::to_value(response)?).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_ip() {
        let issues = parse_payload::<IpPayload>(b"{}").unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, vec!["ip".to_string()]);
        assert_eq!(issues[0].message, "Required");
    }

    #[test]
    fn test_rejects_non_string_ip() {
        let issues = parse_payload::<IpPayload>(br#"{"ip": null}"#).unwrap_err();
        assert_eq!(issues[0].expected, Some("string"));
        assert_eq!(issues[0].received, Some("null"));
    }

    #[test]
    fn test_accepts_any_string() {
        let payload = parse_payload::<IpPayload>(br#"{"ip": "999.999.1"}"#).unwrap();
        assert_eq!(payload.ip, "999.999.1");
    }
}
