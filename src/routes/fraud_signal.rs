use axum::{
    body::Bytes,
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
    Json,
};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::ApiError,
    validation::{
        expect_object, optional_string, parse_payload, require_json_post, Schema, ValidationIssue,
    },
};

pub const IP_ADDRESS_MISMATCH: &str = "IP_ADDRESS_MISMATCH";
pub const IP_MISMATCH_RATE: f64 = 0.10;
pub const IP_MISMATCH_RISK: i32 = 15;

/// Optional override supplied by the caller. When `ip` is present the
/// simulator skips the random draw.
#[derive(Debug, Default, PartialEq)]
pub struct OverridePayload {
    pub ip: Option<String>,
}

impl Schema for OverridePayload {
    fn check(body: Option<&Value>) -> Result<Self, Vec<ValidationIssue>> {
        let object = expect_object(body)?;
        let ip = optional_string(object, "ip").map_err(|issue| vec![issue])?;
        Ok(Self { ip })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signals {
    pub ip_mismatch: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudResult {
    pub fraud_flags: Vec<String>,
    pub risk_score_adjustment: i32,
    pub signals: Signals,
}

impl FraudResult {
    pub fn from_mismatch(ip_mismatch: bool) -> Self {
        if ip_mismatch {
            Self {
                fraud_flags: vec![IP_ADDRESS_MISMATCH.to_string()],
                risk_score_adjustment: IP_MISMATCH_RISK,
                signals: Signals { ip_mismatch },
            }
        } else {
            Self {
                fraud_flags: Vec::new(),
                risk_score_adjustment: 0,
                signals: Signals { ip_mismatch },
            }
        }
    }
}

/// Produce a mock fraud result. An override never mismatches and never
/// touches `rng`.
pub fn simulate<R: Rng + ?Sized>(payload: &OverridePayload, rng: &mut R) -> FraudResult {
    let ip_mismatch = match payload.ip {
        Some(_) => false,
        None => rng.random::<f64>() < IP_MISMATCH_RATE,
    };

    FraudResult::from_mismatch(ip_mismatch)
}

pub async fn handler(method: Method, headers: HeaderMap, body: Bytes) -> Response {
    match try_simulate(&method, &headers, &body) {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

fn try_simulate(method: &Method, headers: &HeaderMap, body: &[u8]) -> Result<Response, ApiError> {
    require_json_post(method, headers)?;

    let payload = parse_payload::<OverridePayload>(body).map_err(|issues| {
        tracing::debug!(issues = issues.len(), "invalid fraud signal payload");
        ApiError::InvalidPayload(issues)
    })?;

    let result = simulate(&payload, &mut rand::rng());
    if result.signals.ip_mismatch {
        tracing::debug!("simulated IP address mismatch");
    }

    Ok(Json(serde_json::to_value(result)?).into_response())
}
