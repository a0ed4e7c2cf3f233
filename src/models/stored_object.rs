//! Represents an object as seen in a live bucket listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry from a live listing of the object store.
///
/// Unlike [`DocumentRecord`](crate::models::document::DocumentRecord),
/// this view comes straight from the bucket and survives process
/// restarts. The declared filename is recovered from object metadata
/// when present, otherwise from the last segment of the key.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StoredObject {
    /// Object key within the bucket.
    #[serde(rename = "blob_name")]
    pub object_key: String,

    /// Filename the client declared at upload time.
    pub original_filename: String,

    /// Content type recorded on the object, if any.
    pub content_type: Option<String>,

    /// Size in bytes.
    pub size: u64,

    /// When the object was last written.
    pub updated: DateTime<Utc>,

    /// Fully qualified locator for the object.
    #[serde(rename = "gcs_uri")]
    pub uri: String,
}
