pub mod config;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use reddit_client::RedditSearchClient;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub reddit: Arc<RedditSearchClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let reddit = RedditSearchClient::new(
            config.user_agent.clone(),
            Duration::from_secs(config.request_timeout_secs),
        );
        Self {
            config: Arc::new(config),
            reddit: Arc::new(reddit),
        }
    }
}

/// Start the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn serve(config: AppConfig) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let app = create_app(AppState::new(config));

    info!(addr = %addr, "Starting analysis server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app).await.context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
