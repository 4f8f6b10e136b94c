//! Wire types and error definitions for the records search API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::RecordSummary;

/// JSON body POSTed to the search endpoint.
///
/// Sort fields travel as enum ordinals, not names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub count: u64,
    pub sort_by: u8,
    pub sort_direction: u8,
}

/// Envelope returned by the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub records: Vec<UpstreamRecord>,
}

/// A single record as returned upstream.
///
/// The real payload carries many more fields (asset URIs, versions, tags,
/// visibility flags); only what the gateway projects is modeled here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamRecord {
    pub id: String,
    pub owner_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl UpstreamRecord {
    /// Project into the minimal summary, applying the placeholder-name
    /// substitution exactly once.
    pub fn into_summary(self) -> RecordSummary {
        RecordSummary::new(self.name, self.owner_id, self.id)
    }
}

/// Errors from the upstream records call.
///
/// Variants exist for logging; the client-visible error body is a single
/// fixed message regardless of which one fired.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("search request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("search returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not the expected JSON envelope.
    #[error("search response undecodable: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
