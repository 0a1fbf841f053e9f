use axum::{extract::State, Json};
use serde_json::Value;

use crate::{error::UpstreamError, state::AppState};

/// Relay the upstream product list unchanged.
///
/// Single attempt, no timeout of its own; a failure fails the invocation.
pub async fn handler(State(state): State<AppState>) -> Result<Json<Value>, UpstreamError> {
    let products = fetch_products(&state.http, &state.config.products_url).await?;
    Ok(Json(products))
}

pub async fn fetch_products(client: &reqwest::Client, url: &str) -> Result<Value, UpstreamError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(UpstreamError::Transport)?;

    response.json::<Value>().await.map_err(UpstreamError::Decode)
}
