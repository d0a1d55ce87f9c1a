use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tower_http::cors::CorsLayer;

use groq_chat_proxy::{config::Config, routes, state::AppState, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("info");

    let config = Config::from_env().context("invalid configuration")?;
    if config.api_key.is_empty() {
        tracing::warn!("GROQ_API_KEY is not set, upstream calls will be rejected");
    }
    tracing::debug!(?config, "configuration loaded");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;

    let state = Arc::new(AppState::new(config));
    let cors = CorsLayer::very_permissive();

    let app: Router = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("chat proxy listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
