use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use relief_http::{AppState, create_router};
use relief_service::DisasterService;
use relief_storage::Storage;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "relief-test-boundary";

/// Router over a fresh, seeded database in a temp dir.
struct TestApp {
    router: Router,
    storage: Arc<Storage>,
    data_dir: PathBuf,
    _temp_dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(
            data_dir.join("sample_disasters.csv"),
            "region,date,severity_score,casualties,displaced\n",
        )
        .unwrap();

        let storage = Arc::new(Storage::new(&temp_dir.path().join("disaster.db")).unwrap());
        storage.initialize(Path::new("/nonexistent/sample.csv")).unwrap();

        let state = Arc::new(AppState {
            service: Arc::new(DisasterService::new(Arc::clone(&storage))),
            data_dir: data_dir.clone(),
        });
        Self { router: create_router(state), storage, data_dir, _temp_dir: temp_dir }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, body)
    }

    async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) =
            self.send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn upload(&self, field: &str, csv: &str) -> (StatusCode, Value) {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"events.csv\"\r\n\
             Content-Type: text/csv\r\n\r\n\
             {csv}\r\n\
             --{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/disaster/upload")
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Body::from(body))
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let (status, body) = app.get_json("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["time"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_regions_listing_is_sorted_and_stable() {
    let app = TestApp::new();
    let (status, first) = app.get_json("/api/disaster/regions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        first,
        json!([
            {"name": "Greenfield", "population": 3000},
            {"name": "Harborview", "population": 4500},
            {"name": "Riverside", "population": 6000},
        ])
    );
    let (_, second) = app.get_json("/api/disaster/regions").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_predict_requires_region() {
    let app = TestApp::new();
    let (status, body) = app.get_json("/api/disaster/predict").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "region param required"}));

    let (status, body) = app.get_json("/api/disaster/predict?region=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "region param required"}));
}

#[tokio::test]
async fn test_predict_repeated_region_uses_first_value() {
    let app = TestApp::new();
    let (status, body) =
        app.get_json("/api/disaster/predict?region=Riverside&region=Harborview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["region"], "Riverside");
    assert_eq!(body["food"], 1200);
}

#[tokio::test]
async fn test_predict_unknown_region() {
    let app = TestApp::new();
    let (status, body) = app.get_json("/api/disaster/predict?region=Lost%20Valley").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "region": "Lost Valley",
            "food": 200,
            "medical": 48,
            "shelter": 32,
            "confidence": 0.9,
            "model": "heuristic-v1",
        })
    );
}

#[tokio::test]
async fn test_upload_then_predict() {
    let app = TestApp::new();
    let csv = "region,date,severity_score,casualties,displaced\n\
               Riverside,2024-07-01,5.0,4,200\n\
               Riverside,2024-07-09,5.0,1,80";
    let (status, body) = app.upload("file", csv).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"inserted": 2}));
    assert_eq!(app.storage.count_disasters().unwrap(), 2);

    let (_, body) = app.get_json("/api/disaster/predict?region=Riverside").await;
    assert_eq!(body["food"], 1500);
    assert_eq!(body["medical"], 360);
    assert_eq!(body["shelter"], 240);
    assert_eq!(body["confidence"], 0.95);
}

#[tokio::test]
async fn test_upload_without_file_part() {
    let app = TestApp::new();
    let (status, body) = app.upload("attachment", "region\nRiverside").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "file required"}));

    let request = Request::builder()
        .method("POST")
        .uri("/api/disaster/upload")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!({"error": "file required"}));
}

#[tokio::test]
async fn test_upload_with_bad_number_commits_nothing() {
    let app = TestApp::new();
    let csv = "region,date,severity_score,casualties,displaced\n\
               Harborview,2024-07-01,3.5,0,10\n\
               Harborview,2024-07-02,extreme,0,10\n\
               Harborview,2024-07-03,2.0,0,10";
    let (status, body) = app.upload("file", csv).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "internal server error"}));
    assert_eq!(app.storage.count_disasters().unwrap(), 0);
}

#[tokio::test]
async fn test_sample_download() {
    let app = TestApp::new();
    let (status, body) = app
        .send(Request::builder().uri("/sample/sample_disasters.csv").body(Body::empty()).unwrap())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().starts_with("region,date"));
}

#[tokio::test]
async fn test_sample_content_type_follows_extension() {
    let app = TestApp::new();
    std::fs::write(app.data_dir.join("summary.xlsx"), b"PK").unwrap();
    std::fs::write(app.data_dir.join("blob"), b"raw").unwrap();

    let content_type = |response: axum::response::Response| {
        response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned()
    };
    let get = |uri: &str| Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.router.clone().oneshot(get("/sample/sample_disasters.csv")).await.unwrap();
    assert_eq!(content_type(response), "text/csv");
    let response = app.router.clone().oneshot(get("/sample/summary.xlsx")).await.unwrap();
    assert_eq!(
        content_type(response),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let response = app.router.clone().oneshot(get("/sample/blob")).await.unwrap();
    assert_eq!(content_type(response), "application/octet-stream");
}

#[tokio::test]
async fn test_sample_missing_or_outside_data_dir() {
    let app = TestApp::new();
    let (status, body) = app.get_json("/sample/missing.csv").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "not found"}));

    let (status, body) = app.get_json("/sample/..%2Fdisaster.db").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "not found"}));
}
