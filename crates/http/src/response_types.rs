//! Response types (Serialize)

use serde::Serialize;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct HealthResponse {
    pub status: &'static str,
    pub time: String,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub inserted: usize,
}
