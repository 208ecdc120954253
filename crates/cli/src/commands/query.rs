use anyhow::Result;
use relief_service::DisasterService;
use std::sync::Arc;

use crate::open_storage;

pub(crate) async fn open_service() -> Result<DisasterService> {
    let storage = tokio::task::spawn_blocking(open_storage).await??;
    Ok(DisasterService::new(Arc::new(storage)))
}

pub(crate) async fn run_regions() -> Result<()> {
    let regions = open_service().await?.list_regions().await?;
    println!("{}", serde_json::to_string_pretty(&regions)?);
    Ok(())
}

pub(crate) async fn run_predict(region: String) -> Result<()> {
    let prediction = open_service().await?.predict_needs(&region).await?;
    println!("{}", serde_json::to_string_pretty(&prediction)?);
    Ok(())
}
