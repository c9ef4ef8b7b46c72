#![recursion_limit = "256"]

mod analyzer;
mod config;
mod routes;
mod state;

use std::sync::Arc;

use analyzer::{AnalysisClient, TextAnalyzer};
use config::{AnalysisConfig, ServerConfig};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let server = ServerConfig::from_env().expect("invalid server config");

    // Non-fatal: /api/analyze answers 503 until a key is configured.
    let analyzer: Option<Arc<dyn TextAnalyzer>> = match AnalysisConfig::from_env() {
        Ok(config) => match AnalysisClient::new(config) {
            Ok(client) => {
                tracing::info!(url = client.url(), "text analyzer initialized");
                Some(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!(error = %e, "text analyzer client failed to build; analysis disabled");
                None
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "text analyzer not configured; analysis disabled");
            None
        }
    };

    let state = state::AppState::new(analyzer);
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", server.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = server.port, "safetext listening");
    axum::serve(listener, app).await.expect("server failed");
}
