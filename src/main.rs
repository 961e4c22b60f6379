//! Tokenizer service — binary entrypoint.
//! Boots the Axum HTTP server with the tokenizer routes and `/metrics`.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tweet_tokenizer::api::{self, AppState};
use tweet_tokenizer::metrics::Metrics;

const ENV_ADDR: &str = "TOKENIZER_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tweet_tokenizer=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let metrics = Metrics::init()?;
    let state = AppState::from_env();
    info!(config = ?state.config(), "tokenizer config");

    let app = api::router(state).merge(metrics.router());

    let addr = std::env::var(ENV_ADDR).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app).await.context("serving http")?;
    Ok(())
}
