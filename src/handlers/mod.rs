//! HTTP handlers, grouped by surface.

pub mod document_handlers;
pub mod health_handlers;
pub mod query_handlers;
