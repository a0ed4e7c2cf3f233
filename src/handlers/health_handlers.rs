//! Liveness probes.
//!
//! - GET /               -> service banner
//! - GET /test           -> simple probe
//! - GET /test-documents -> probe for the documents surface
//!
//! All three are cheap, perform no I/O, and always return 200.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct StatusResponse {
    status: String,
    message: String,
}

/// `GET /`
pub async fn home() -> impl IntoResponse {
    tracing::debug!("home route accessed");
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "Server is running".into(),
            message: "Welcome to RAG API".into(),
        }),
    )
}

/// `GET /test`
pub async fn test() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "success".into(),
            message: "Test endpoint is working".into(),
        }),
    )
}

/// `GET /test-documents`
pub async fn test_documents() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "success".into(),
            message: "Documents test endpoint works".into(),
        }),
    )
}
