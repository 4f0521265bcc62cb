mod config;
mod errors;
mod routes;

use tracing::{info, warn};

use crate::config::HostConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legal_desk_host=debug,tower_http=debug".into()),
        )
        .init();

    // ── Bundle ────────────────────────────────────────────────────────────────
    let config = HostConfig::from_env();
    if let Err(e) = config.ensure_bundle() {
        // Still serve /healthz so an orchestrator sees the host; pages will 404.
        warn!("{e}");
    }
    info!("Serving dashboard bundle from {}", config.dist_dir.display());

    // ── Router ────────────────────────────────────────────────────────────────
    let app = routes::static_routes::router(&config);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
