//! src/services/storage_service.rs
//!
//! StorageService — a thin adapter over an external object store. It
//! performs exactly three primitives: write-with-metadata, list-by-prefix,
//! and delete-by-key. Document bookkeeping lives elsewhere (the in-memory
//! registry); this file only deals with stored bytes and their attached
//! metadata.

use crate::models::stored_object::StoredObject;
use bytes::Bytes;
use chrono::Utc;
use futures::StreamExt;
use object_store::{
    Attribute, AttributeValue, Attributes, GetOptions, ObjectStore, PutOptions, PutPayload,
    path::Path,
};
use std::{borrow::Cow, sync::Arc};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Key prefix under which uploaded documents are stored.
pub const DOCUMENT_PREFIX: &str = "documents";

/// Metadata key holding the client-declared filename.
const META_ORIGINAL_FILENAME: &str = "original-filename";

/// Metadata key holding the upload timestamp.
const META_UPLOADED_AT: &str = "uploaded-at";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write object `{key}`: {source}")]
    Write {
        key: String,
        source: object_store::Error,
    },
    #[error("failed to list objects under `{prefix}`: {source}")]
    List {
        prefix: String,
        source: object_store::Error,
    },
    #[error("failed to delete object `{key}`: {source}")]
    Delete {
        key: String,
        source: object_store::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Outcome of a successful store operation.
#[derive(Clone, Debug)]
pub struct StoredUpload {
    /// Key the content was written under.
    pub object_key: String,

    /// Fully qualified locator for the stored object.
    pub uri: String,

    /// Filename as declared by the client.
    pub original_filename: String,
}

/// StorageService wraps the three object-store operations the backend needs:
/// - Store content under a fresh random key, with descriptive metadata
/// - List everything under a key prefix
/// - Remove a single object by key
///
/// The underlying store is any `object_store::ObjectStore`; production uses
/// the GCS backend while tests substitute an in-memory one. Every call is
/// attempt-once with failures surfaced directly to the caller.
#[derive(Clone)]
pub struct StorageService {
    /// Shared handle to the object-store backend.
    store: Arc<dyn ObjectStore>,

    /// Bucket name, used only to render fully qualified locators.
    bucket: String,
}

impl StorageService {
    /// Create a new StorageService over the given backend and bucket name.
    pub fn new(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }

    /// Render the fully qualified locator for an object key.
    fn uri_for(&self, key: &str) -> String {
        format!("gs://{}/{}", self.bucket, key)
    }

    /// Build a fresh object key: random identifier plus the original
    /// file extension, never the filename itself, so keys cannot collide.
    fn fresh_key(declared_name: &str, key_prefix: &str) -> String {
        let extension = std::path::Path::new(declared_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        format!("{key_prefix}/{}{extension}", Uuid::new_v4())
    }

    /// Write `content` under a fresh key beneath `key_prefix`.
    ///
    /// The declared filename, content type, and upload timestamp are
    /// attached to the stored object so a later listing can recover them
    /// even after the process restarts.
    pub async fn store(
        &self,
        content: Bytes,
        declared_name: &str,
        declared_type: &str,
        key_prefix: &str,
    ) -> StorageResult<StoredUpload> {
        let object_key = Self::fresh_key(declared_name, key_prefix);
        let location = Path::from(object_key.as_str());

        let mut attributes = Attributes::new();
        attributes.insert(
            Attribute::ContentType,
            AttributeValue::from(declared_type.to_string()),
        );
        attributes.insert(
            Attribute::Metadata(Cow::Borrowed(META_ORIGINAL_FILENAME)),
            AttributeValue::from(declared_name.to_string()),
        );
        attributes.insert(
            Attribute::Metadata(Cow::Borrowed(META_UPLOADED_AT)),
            AttributeValue::from(Utc::now().to_rfc3339()),
        );

        self.store
            .put_opts(
                &location,
                PutPayload::from(content),
                PutOptions::from(attributes),
            )
            .await
            .map_err(|source| StorageError::Write {
                key: object_key.clone(),
                source,
            })?;

        debug!("stored `{}` as `{}`", declared_name, object_key);

        Ok(StoredUpload {
            uri: self.uri_for(&object_key),
            original_filename: declared_name.to_string(),
            object_key,
        })
    }

    /// List every object under `key_prefix`.
    ///
    /// Pure directory markers (zero-length keys ending in a separator) are
    /// skipped. The declared filename is recovered from the object's
    /// metadata when present, else derived from the key's last segment.
    /// Ordering is whatever the store yields; callers must not depend on it.
    pub async fn list(&self, key_prefix: &str) -> StorageResult<Vec<StoredObject>> {
        let prefix = Path::from(key_prefix);
        let mut entries = self.store.list(Some(&prefix));

        let mut files = Vec::new();
        while let Some(entry) = entries.next().await {
            let meta = entry.map_err(|source| StorageError::List {
                prefix: key_prefix.to_string(),
                source,
            })?;

            if meta.size == 0 && meta.location.as_ref().ends_with('/') {
                continue;
            }

            // Metadata lives on the object itself; fetch it without the body.
            // A failed lookup falls back to the key-derived name.
            let options = GetOptions {
                head: true,
                ..Default::default()
            };
            let attributes = match self.store.get_opts(&meta.location, options).await {
                Ok(result) => result.attributes,
                Err(err) => {
                    debug!("no metadata for `{}`: {}", meta.location, err);
                    Attributes::new()
                }
            };

            let original_filename = attributes
                .get(&Attribute::Metadata(Cow::Borrowed(META_ORIGINAL_FILENAME)))
                .map(|value| value.to_string())
                .unwrap_or_else(|| meta.location.filename().unwrap_or_default().to_string());
            let content_type = attributes
                .get(&Attribute::ContentType)
                .map(|value| value.to_string());

            files.push(StoredObject {
                object_key: meta.location.to_string(),
                original_filename,
                content_type,
                size: meta.size,
                updated: meta.last_modified,
                uri: self.uri_for(meta.location.as_ref()),
            });
        }

        Ok(files)
    }

    /// Delete the object stored under `object_key`.
    ///
    /// Deletion is idempotent: a key that is already gone counts as
    /// success. Any other backend failure is surfaced as a Delete error.
    pub async fn remove(&self, object_key: &str) -> StorageResult<()> {
        let location = Path::from(object_key);
        match self.store.delete(&location).await {
            Ok(()) => {
                debug!("deleted object `{}`", object_key);
                Ok(())
            }
            Err(object_store::Error::NotFound { .. }) => {
                debug!("object `{}` already absent", object_key);
                Ok(())
            }
            Err(source) => Err(StorageError::Delete {
                key: object_key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    fn service() -> (StorageService, Arc<dyn ObjectStore>) {
        let store: Arc<dyn ObjectStore> = Arc::new(InMemory::new());
        (
            StorageService::new(Arc::clone(&store), "test-bucket"),
            store,
        )
    }

    #[tokio::test]
    async fn store_then_list_recovers_declared_filename() {
        let (service, _store) = service();

        let upload = service
            .store(
                Bytes::from_static(b"hello"),
                "report.pdf",
                "application/pdf",
                DOCUMENT_PREFIX,
            )
            .await
            .unwrap();

        assert!(upload.object_key.starts_with("documents/"));
        assert!(upload.object_key.ends_with(".pdf"));
        assert_eq!(
            upload.uri,
            format!("gs://test-bucket/{}", upload.object_key)
        );

        let files = service.list(DOCUMENT_PREFIX).await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].original_filename, "report.pdf");
        assert_eq!(files[0].content_type.as_deref(), Some("application/pdf"));
        assert_eq!(files[0].size, 5);
        assert_eq!(files[0].object_key, upload.object_key);
    }

    #[tokio::test]
    async fn list_falls_back_to_key_segment_without_metadata() {
        let (service, store) = service();

        // Written directly, bypassing the adapter, so no metadata attached.
        store
            .put(
                &Path::from("documents/plain.txt"),
                PutPayload::from(Bytes::from_static(b"hi")),
            )
            .await
            .unwrap();

        let files = service.list(DOCUMENT_PREFIX).await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].original_filename, "plain.txt");
    }

    #[tokio::test]
    async fn keys_are_random_not_filename_derived() {
        let (service, _store) = service();

        let first = service
            .store(Bytes::from_static(b"a"), "same.txt", "text/plain", DOCUMENT_PREFIX)
            .await
            .unwrap();
        let second = service
            .store(Bytes::from_static(b"b"), "same.txt", "text/plain", DOCUMENT_PREFIX)
            .await
            .unwrap();

        assert_ne!(first.object_key, second.object_key);
        assert!(!first.object_key.contains("same"));
    }

    #[tokio::test]
    async fn remove_is_idempotent_for_missing_keys() {
        let (service, _store) = service();

        service.remove("documents/never-existed.txt").await.unwrap();
    }

    #[tokio::test]
    async fn remove_deletes_the_stored_object() {
        let (service, _store) = service();

        let upload = service
            .store(Bytes::from_static(b"x"), "gone.txt", "text/plain", DOCUMENT_PREFIX)
            .await
            .unwrap();
        service.remove(&upload.object_key).await.unwrap();

        let files = service.list(DOCUMENT_PREFIX).await.unwrap();
        assert!(files.is_empty());
    }
}
