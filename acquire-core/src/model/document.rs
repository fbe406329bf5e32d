// General imports
use serde::{Deserialize, Serialize};

/// A policy document known to the document registry.
///
/// Two provenance classes share this type: seeded demo documents carry
/// ids in the reserved `seed-` namespace and are never persisted, while
/// user uploads get a generated id and round-trip through the key-value
/// store.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub id: String,
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// Locale-formatted upload date, display only.
    pub uploaded_at: String,
}
