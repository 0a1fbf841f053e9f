use std::env::{self, set_var};

use edge_handlers::{routes, state::AppState};
use lambda_http::{run, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    let state = AppState::new();
    let port = state.config.port;
    let app = routes::router(state);

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        return run(app).await;
    }

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Serving all handlers on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
