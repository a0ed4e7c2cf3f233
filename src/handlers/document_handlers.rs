//! HTTP handlers for document upload, listing, and deletion.
//!
//! Each handler validates its input, delegates the storage side-effect to
//! `StorageService`, then updates the in-memory registry. The store write
//! always precedes registration, and the remote delete always precedes
//! local removal, so the registry never points at content that was not
//! (or is no longer) stored.

use crate::{
    errors::AppError,
    models::document::DocumentRecord,
    services::storage_service::DOCUMENT_PREFIX,
    state::AppState,
};
use axum::{
    Json,
    extract::{Multipart, Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

/// `POST /upload` — multipart form with a `file` field.
///
/// 400 when the field is missing or carries an empty filename; 500 when
/// the object-store write fails. On success the document is registered
/// and its id returned.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(format!("Malformed multipart body: {err}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::bad_request("No selected file"));
        }
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let content = field
            .bytes()
            .await
            .map_err(|err| AppError::bad_request(format!("Failed to read file part: {err}")))?;

        let upload = state
            .storage
            .store(content, &filename, &content_type, DOCUMENT_PREFIX)
            .await?;

        let record = DocumentRecord {
            id: Uuid::new_v4(),
            filename: filename.clone(),
            content_type,
            uploaded_at: Utc::now(),
            uri: upload.uri,
            object_key: upload.object_key,
        };
        let document_id = record.id;
        state.registry.register(record);

        tracing::info!(
            "added document {} with id {} ({} registered)",
            filename,
            document_id,
            state.registry.len()
        );

        return Ok(Json(json!({
            "success": true,
            "message": format!("Document {filename} processed and ready for queries"),
            "document_id": document_id,
        })));
    }

    Err(AppError::bad_request("No file part"))
}

/// `GET /documents` — registry snapshot plus a live bucket listing.
///
/// The two views are returned side by side, not reconciled: the registry
/// forgets on restart while the bucket does not.
pub async fn list_documents(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let gcs_files = state.storage.list(DOCUMENT_PREFIX).await?;
    let documents = state.registry.list_all();

    Ok(Json(json!({
        "success": true,
        "documents": documents,
        "gcs_files": gcs_files,
    })))
}

/// `DELETE /documents/{id}`
///
/// The remote object is deleted before the registry entry: a failed
/// remote delete leaves the record in place rather than dangling.
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = Uuid::parse_str(&id)
        .ok()
        .and_then(|id| state.registry.find_by_id(id))
        .ok_or_else(|| AppError::not_found("Document not found"))?;

    state.storage.remove(&record.object_key).await?;
    state.registry.remove_by_id(record.id);

    tracing::info!("deleted document {} ({})", record.filename, record.id);

    Ok(Json(json!({
        "success": true,
        "message": format!("Document {} deleted", record.filename),
    })))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{test_server, upload_file};
    use axum::http::StatusCode;
    use axum_test::multipart::MultipartForm;
    use serde_json::Value;

    #[tokio::test]
    async fn upload_without_file_part_is_rejected() {
        let (server, registry) = test_server();

        let response = server
            .post("/upload")
            .multipart(MultipartForm::new().add_text("other", "data"))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "No file part");
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn upload_with_empty_filename_is_rejected() {
        let (server, registry) = test_server();

        let part = axum_test::multipart::Part::bytes(b"payload".as_slice()).file_name("");
        let response = server
            .post("/upload")
            .multipart(MultipartForm::new().add_part("file", part))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "No selected file");
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn upload_registers_exactly_one_document() {
        let (server, registry) = test_server();

        let document_id = upload_file(&server, "report.pdf", b"pdf bytes").await;

        assert_eq!(registry.len(), 1);

        let listing = server.get("/documents").await;
        assert_eq!(listing.status_code(), StatusCode::OK);
        let body = listing.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["documents"][0]["id"], document_id.to_string());
        assert_eq!(body["documents"][0]["filename"], "report.pdf");
        assert_eq!(body["gcs_files"][0]["original_filename"], "report.pdf");
    }

    #[tokio::test]
    async fn delete_removes_the_document_once() {
        let (server, registry) = test_server();
        let document_id = upload_file(&server, "report.pdf", b"pdf bytes").await;

        let first = server.delete(&format!("/documents/{document_id}")).await;
        assert_eq!(first.status_code(), StatusCode::OK);
        assert_eq!(
            first.json::<Value>()["message"],
            "Document report.pdf deleted"
        );
        assert!(registry.is_empty());

        let second = server.delete(&format!("/documents/{document_id}")).await;
        assert_eq!(second.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(second.json::<Value>()["error"], "Document not found");
    }

    #[tokio::test]
    async fn delete_of_unknown_id_leaves_registry_untouched() {
        let (server, registry) = test_server();
        upload_file(&server, "keep.txt", b"keep me").await;

        let response = server
            .delete(&format!("/documents/{}", uuid::Uuid::new_v4()))
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(registry.len(), 1);

        // Non-UUID ids are just unknown documents, not a different error.
        let response = server.delete("/documents/not-a-uuid").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_stored_object_too() {
        let (server, _registry) = test_server();
        let document_id = upload_file(&server, "report.pdf", b"pdf bytes").await;

        server.delete(&format!("/documents/{document_id}")).await;

        let body = server.get("/documents").await.json::<Value>();
        assert_eq!(body["gcs_files"].as_array().unwrap().len(), 0);
    }
}
