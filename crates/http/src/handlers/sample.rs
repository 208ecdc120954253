//! Raw file download from the data directory.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::path::{Component, Path as FsPath, PathBuf};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;

pub async fn sample_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let path = resolve_in(&state.data_dir, &filename).await.ok_or_else(ApiError::not_found)?;
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "sample file unreadable");
        ApiError::not_found()
    })?;
    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response())
}

/// Resolves `relative` to a regular file inside `root`.
///
/// Rejects absolute paths and `..` outright, then re-checks the canonical
/// path so symlinks cannot point outside `root` either.
async fn resolve_in(root: &FsPath, relative: &str) -> Option<PathBuf> {
    let relative = FsPath::new(relative);
    if relative.components().any(|c| !matches!(c, Component::Normal(_) | Component::CurDir)) {
        return None;
    }
    let root = tokio::fs::canonicalize(root).await.ok()?;
    let candidate = tokio::fs::canonicalize(root.join(relative)).await.ok()?;
    if !candidate.starts_with(&root) {
        tracing::warn!(path = %candidate.display(), "sample path escapes data directory");
        return None;
    }
    let metadata = tokio::fs::metadata(&candidate).await.ok()?;
    metadata.is_file().then_some(candidate)
}
