//! Represents a document registered with the in-memory registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for a single uploaded document.
///
/// A record is created only after the content has been written to the
/// object store, and removed only after the stored object has been
/// deleted. The record holds metadata, never the content bytes.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DocumentRecord {
    /// Unique identifier generated at upload time.
    pub id: Uuid,

    /// Original client-supplied filename (untrusted, not sanitized).
    pub filename: String,

    /// MIME type as declared by the client.
    pub content_type: String,

    /// When the document was registered.
    pub uploaded_at: DateTime<Utc>,

    /// Fully qualified locator of the stored object.
    #[serde(rename = "gcs_uri")]
    pub uri: String,

    /// Key under which the content lives in the object store.
    ///
    /// Derived from a random identifier rather than the filename, so it
    /// is unique for the lifetime of the bucket.
    #[serde(rename = "blob_name")]
    pub object_key: String,
}
