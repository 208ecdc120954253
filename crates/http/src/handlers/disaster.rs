use axum::{
    Json,
    extract::{
        Multipart, Query, State, multipart::MultipartRejection, rejection::QueryRejection,
    },
};
use std::sync::Arc;

use relief_core::{NeedsPrediction, Region};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::PredictQuery;
use crate::response_types::UploadResponse;

const REGION_REQUIRED: &str = "region param required";
const FILE_REQUIRED: &str = "file required";
const FILE_FIELD: &str = "file";

pub async fn list_regions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Region>>, ApiError> {
    Ok(Json(state.service.list_regions().await?))
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<NeedsPrediction>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let region = PredictQuery::from_params(params)
        .region
        .filter(|r| !r.is_empty())
        .ok_or_else(|| ApiError::bad_request(REGION_REQUIRED))?;
    Ok(Json(state.service.predict_needs(&region).await?))
}

pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "upload without multipart body");
        ApiError::bad_request(FILE_REQUIRED)
    })?;

    while let Some(field) =
        multipart.next_field().await.map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        tracing::debug!(file_name = ?field.file_name(), "reading uploaded CSV");
        let bytes = field.bytes().await.map_err(|e| ApiError::bad_request(e.body_text()))?;
        let inserted = state.service.ingest_csv(bytes.to_vec()).await?;
        return Ok(Json(UploadResponse { inserted }));
    }

    Err(ApiError::bad_request(FILE_REQUIRED))
}
