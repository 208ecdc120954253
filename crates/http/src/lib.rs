//! HTTP API server for disaster-relief.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use relief_service::DisasterService;

pub use response_types::{HealthResponse, UploadResponse, VersionResponse};

/// Largest accepted request body; uploads are read fully into memory.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Region, ingestion and prediction operations
    pub service: Arc<DisasterService>,
    /// Directory served under `/sample/`
    pub data_dir: PathBuf,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/version", get(version))
        .route("/api/disaster/regions", get(handlers::disaster::list_regions))
        .route("/api/disaster/predict", get(handlers::disaster::predict))
        .route("/api/disaster/upload", post(handlers::disaster::upload))
        .route("/sample/{*filename}", get(handlers::sample::sample_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
