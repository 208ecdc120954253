use anyhow::Result;
use relief_http::{AppState, create_router};
use relief_service::DisasterService;
use std::sync::Arc;

use crate::{get_data_dir, open_storage};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    // Schema and seed data must be in place before the listener accepts requests.
    let storage = Arc::new(tokio::task::spawn_blocking(open_storage).await??);

    let state = Arc::new(AppState {
        service: Arc::new(DisasterService::new(storage)),
        data_dir: get_data_dir(),
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
