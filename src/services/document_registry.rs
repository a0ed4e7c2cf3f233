//! In-memory registry of uploaded document metadata.
//!
//! No persistence: the registry is process-wide state that is lost on
//! restart. A single mutex serializes every read-modify-write sequence so
//! concurrent handler tasks cannot interleave mutations.

use crate::models::document::DocumentRecord;
use std::sync::Mutex;
use uuid::Uuid;

/// Insertion-ordered index of registered documents.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    records: Mutex<Vec<DocumentRecord>>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DocumentRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a record. Ids are generated from UUIDv4 so collisions do
    /// not occur; duplicates by content are allowed.
    pub fn register(&self, record: DocumentRecord) {
        self.lock().push(record);
    }

    /// Look up a record by id.
    pub fn find_by_id(&self, id: Uuid) -> Option<DocumentRecord> {
        self.lock().iter().find(|record| record.id == id).cloned()
    }

    /// Remove the record with the given id, returning it. `None` when the
    /// id is unknown; the caller decides how to signal that.
    pub fn remove_by_id(&self, id: Uuid) -> Option<DocumentRecord> {
        let mut records = self.lock();
        let position = records.iter().position(|record| record.id == id)?;
        Some(records.remove(position))
    }

    /// Snapshot of all records in insertion order.
    pub fn list_all(&self) -> Vec<DocumentRecord> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}
