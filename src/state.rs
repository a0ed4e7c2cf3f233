use crate::services::{document_registry::DocumentRegistry, storage_service::StorageService};
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Adapter over the external object store.
    pub storage: StorageService,

    /// Process-wide document registry. Lost on restart.
    pub registry: Arc<DocumentRegistry>,
}

impl AppState {
    pub fn new(storage: StorageService) -> Self {
        Self {
            storage,
            registry: Arc::new(DocumentRegistry::new()),
        }
    }
}
