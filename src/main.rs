use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blog_summarizer::{
    AppState,
    api::routes::create_router,
    config::Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    // Create application state
    let app_state = AppState {
        config: Arc::new(config),
        http: blog_summarizer::scraper::build_client(),
    };

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    // Start the server
    info!(%server_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
