use crate::{
    services::{document_registry::DocumentRegistry, storage_service::StorageService},
    state::AppState,
};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use object_store::{ObjectStore, memory::InMemory};
use std::sync::Arc;
use uuid::Uuid;

/// Build a TestServer over the full router, backed by an in-memory
/// object store. Returns the registry handle so tests can assert on it.
pub fn test_server() -> (TestServer, Arc<DocumentRegistry>) {
    let store: Arc<dyn ObjectStore> = Arc::new(InMemory::new());
    let state = AppState::new(StorageService::new(store, "test-bucket"));
    let registry = Arc::clone(&state.registry);

    let server = TestServer::new(crate::routes::routes::routes().with_state(state))
        .expect("failed to start test server");
    (server, registry)
}

/// Upload one file through the real endpoint and return its document id.
pub async fn upload_file(server: &TestServer, filename: &str, content: &[u8]) -> Uuid {
    let part = Part::bytes(content.to_vec())
        .file_name(filename)
        .mime_type("application/octet-stream");
    let response = server
        .post("/upload")
        .multipart(MultipartForm::new().add_part("file", part))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    body["document_id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("upload response carries a document id")
}
