pub mod fraud_signal;
pub mod greet;
pub mod products;
pub mod validate_ip;

use axum::{routing::any, Router};

use crate::state::AppState;

/// Every handler mounted on one router, for running the whole set locally.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", any(greet::handler))
        .route("/api/fraud-signal", any(fraud_signal::handler))
        .route("/api/validate-ip", any(validate_ip::handler))
        .route("/api/products", any(products::handler))
        .with_state(state)
}

/// A single handler answering on every path and method, as deployed on its
/// own function.
pub fn greet_function() -> Router {
    Router::new().fallback(greet::handler)
}

pub fn fraud_signal_function() -> Router {
    Router::new().fallback(fraud_signal::handler)
}

pub fn validate_ip_function() -> Router {
    Router::new().fallback(validate_ip::handler)
}

pub fn products_function(state: AppState) -> Router {
    Router::new().fallback(products::handler).with_state(state)
}
