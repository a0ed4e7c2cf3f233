//! Defines routes for the document QA backend.
//!
//! ## Structure
//! - **Probes**
//!   - `GET    /`                — service banner
//!   - `GET    /test`            — simple probe
//!   - `GET    /test-documents`  — probe for the documents surface
//!
//! - **Documents**
//!   - `POST   /upload`          — multipart upload (field `file`)
//!   - `GET    /documents`       — registry snapshot + live bucket listing
//!   - `DELETE /documents/{id}`  — delete one document
//!
//! - **Query**
//!   - `POST   /query`           — mock question answering

use crate::{
    handlers::{
        document_handlers::{delete_document, list_documents, upload_document},
        health_handlers::{home, test, test_documents},
        query_handlers::query,
    },
    state::AppState,
};
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Build and return the router for all endpoints.
///
/// The router carries shared state (`AppState`) to all handlers.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/test", get(test))
        .route("/test-documents", get(test_documents))
        .route("/upload", post(upload_document))
        .route("/documents", get(list_documents))
        .route("/documents/{id}", delete(delete_document))
        .route("/query", post(query))
}
