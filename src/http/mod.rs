//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, listing handler)
//!     → request.rs (query parameter resolution, request ID)
//!     → [upstream client performs the search]
//!     → [encode subsystem renders the payload]
//!     → response.rs (content-type mapping, error envelope)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{ListingQuery, ListingRequest, RequestIdLayer, X_REQUEST_ID};
pub use response::{ApiError, ErrorBody};
pub use server::HttpServer;
