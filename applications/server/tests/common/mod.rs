//! Common test utilities and fixtures

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use vinyl_artwork::ArtworkExtractor;
use vinyl_core::PlayerSettings;
use vinyl_server::{create_router, AppState};
use vinyl_storage::LocalRecordStore;

/// Router backed by a real SQLite file and a temporary web directory
pub struct TestApp {
    pub router: Router,
    pub store: Arc<LocalRecordStore>,
    pub web_dir: TempDir,
    _db_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", db_dir.path().join("test.db").display());
        let store = Arc::new(LocalRecordStore::open(&url).await.unwrap());

        let web_dir = TempDir::new().unwrap();
        let app_state = AppState::new(
            store.clone(),
            &PlayerSettings::default(),
            Arc::new(ArtworkExtractor::new(4)),
        );
        let router = create_router(app_state, web_dir.path().to_path_buf(), 1024 * 1024);

        Self {
            router,
            store,
            web_dir,
            _db_dir: db_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn with_bytes(method: &str, uri: &str, content_type: &str, bytes: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(bytes))
        .unwrap()
}

pub fn with_json(method: &str, uri: &str, json: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Minimal MP3 with an ID3v2.3 tag holding a 4-byte PNG "image"
pub fn tagged_mp3() -> Vec<u8> {
    let mut region = b"APIC\x00\x00\x00\x00\x00\x00\x00image/png\x00\x03cover\x00".to_vec();
    region.extend_from_slice(&[0x89, 0x50, 0x4E, 0x47]);

    let mut bytes = b"ID3\x03\x00\x00".to_vec();
    bytes.extend_from_slice(&vinyl_artwork::id3::encode_synchsafe(region.len() as u32));
    bytes.extend_from_slice(&region);
    bytes.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00]);
    bytes
}
