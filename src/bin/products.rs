use std::env::set_var;

use edge_handlers::{routes, state::AppState};
use lambda_http::{run, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    let state = AppState::new();
    tracing::info!(upstream = %state.config.products_url, "Product proxy starting");

    run(routes::products_function(state)).await
}
