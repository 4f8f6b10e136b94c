//! Record summaries and resource URIs.

/// Placeholder display name for records with no usable name.
pub const UNKNOWN_NAME: &str = "unknown";

/// Minimal (name, owner, id) projection of an upstream record.
///
/// Built once per inbound request from the upstream payload, consumed once
/// by the encoder, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    /// Display name. Never empty: the placeholder is applied at
    /// construction.
    pub name: String,

    /// Opaque owner identifier.
    pub owner_id: String,

    /// Opaque record identifier.
    pub id: String,
}

impl RecordSummary {
    /// Build a summary, substituting the placeholder when the source name
    /// is absent or empty. The substitution happens here once, ahead of
    /// every encoder.
    pub fn new(name: Option<String>, owner_id: impl Into<String>, id: impl Into<String>) -> Self {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_NAME.to_string(),
        };
        Self {
            name,
            owner_id: owner_id.into(),
            id: id.into(),
        }
    }

    /// Synthetic `resrec:///{ownerId}/{id}` URI identifying this record.
    ///
    /// Recomputed on every request, never persisted.
    pub fn resource_uri(&self) -> String {
        format!("resrec:///{}/{}", self.owner_id, self.id)
    }
}
