use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

#[derive(Debug, Clone)]
pub struct BundleInfo {
    pub dist_dir: String,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub bundle: String,
}

/// GET `/healthz`: liveness plus which bundle is being served
pub async fn health_handler(State(info): State<BundleInfo>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        bundle: info.dist_dir,
    })
}

/// Static bundle with an index.html fallback so client-side paths still load the app.
pub fn router(config: &HostConfig) -> Router {
    let assets = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));
    let info = BundleInfo { dist_dir: config.dist_dir.display().to_string() };

    Router::new()
        .route("/healthz", get(health_handler))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(info)
}
