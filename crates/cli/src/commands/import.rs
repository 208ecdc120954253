use anyhow::{Context as _, Result};
use std::path::Path;

use super::query::open_service;

pub(crate) async fn run_import(file: &Path) -> Result<()> {
    let csv = tokio::fs::read(file)
        .await
        .with_context(|| format!("reading {}", file.display()))?;
    let service = open_service().await?;
    let inserted = service.ingest_csv(csv).await?;
    println!("{}", serde_json::json!({ "inserted": inserted }));
    Ok(())
}
