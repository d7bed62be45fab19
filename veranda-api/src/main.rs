use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use veranda_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veranda_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = veranda_store::Config::load().context("Failed to load config")?;
    tracing::info!("Starting Veranda quote API on port {}", config.server.port);

    let pricing = veranda_store::load_pricing_map(config.pricing.tables_path.as_deref())
        .context("Failed to load pricing tables")?;

    let app_state = AppState {
        pricing: Arc::new(pricing),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
