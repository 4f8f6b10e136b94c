//! Upstream records API subsystem.
//!
//! # Data Flow
//! ```text
//! ListingRequest
//!     → types.rs (SearchRequest wire body, enum ordinals)
//!     → client.rs (single POST to the search endpoint)
//!     → types.rs (SearchResponse envelope → UpstreamRecord)
//!     → records::RecordSummary projection
//! ```
//!
//! # Design Decisions
//! - One outbound call per inbound request; no retry, no backoff
//! - Any transport, status, or decode failure is terminal for the request
//! - Only the projected fields are modeled; the rest of the payload is
//!   ignored

pub mod client;
pub mod types;

pub use client::RecordsClient;
pub use types::{SearchRequest, SearchResponse, UpstreamError, UpstreamRecord, UpstreamResult};
