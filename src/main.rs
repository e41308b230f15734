mod client;
mod config;
mod error;
mod explain;
mod handlers;
mod metrics;
mod models;
mod prompt;
mod scenario;
mod state;

use clap::Parser; // for cli
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::client::GeminiClient;
use crate::config::{Args, Config};
use crate::explain::ExplanationService;
use crate::scenario::Scenario;
use crate::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional, real environment wins
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // refuse to start without a credential
    let config = match Config::from_args(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            return Err(e.into());
        }
    };

    let generator = GeminiClient::new(reqwest::Client::new(), &config);
    let state = Arc::new(AppState {
        service: ExplanationService::new(Arc::new(generator)),
        model: config.model.clone(),
    });

    let app = handlers::router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Explain gateway running on http://{addr}");
    tracing::info!(model = %config.model, api = %config.api_base_url, "Forwarding prompts");
    let scenarios: Vec<&str> = Scenario::ALL.iter().map(|s| s.tag()).collect();
    tracing::info!("Scenarios: {}", scenarios.join(", "));
    axum::serve(listener, app).await?;
    Ok(())
}
