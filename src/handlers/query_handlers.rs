//! Handler for the mock question-answering endpoint.

use crate::{errors::AppError, state::AppState};
use axum::{Json, extract::State, response::IntoResponse};
use serde_json::{Value, json};

const NO_DOCUMENTS_ANSWER: &str =
    "I don't have any documents to reference. Please upload a document first.";

/// `POST /query` — JSON body `{"query": "..."}`.
///
/// There is no retrieval pipeline behind this: the answer is a canned
/// template referencing the filenames currently in the registry, or a
/// fixed fallback when nothing has been uploaded.
pub async fn query(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let query_text = body
        .get("query")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::bad_request("No query provided"))?;

    tracing::info!("received query: {}", query_text);

    let answer = if state.registry.is_empty() {
        NO_DOCUMENTS_ANSWER.to_string()
    } else {
        let document_names = state
            .registry
            .list_all()
            .into_iter()
            .map(|record| record.filename)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Based on the documents you've uploaded ({document_names}), I can provide the \
             following information about '{query_text}': This is a simulated response that \
             would normally come from an AI model processing your query against the \
             documents you've provided."
        )
    };

    Ok(Json(json!({
        "answer": answer,
        "success": true,
    })))
}
