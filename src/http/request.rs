//! Inbound request handling: query resolution and request IDs.
//!
//! # Responsibilities
//! - Parse and default the listing query parameters
//! - Reject sort parameters outside the enumerated sets
//! - Stamp every request with an `x-request-id` header
//!
//! # Design Decisions
//! - Unusable `count` values fall back to the configured default rather
//!   than erroring, matching the historical `count || default` behavior
//! - Unrecognized `format` values select the configured default format
//! - Request ID added as early as possible for tracing

use std::task::{Context, Poll};

use axum::http::{HeaderValue, Request};
use serde::Deserialize;
use tower::{Layer, Service};
use uuid::Uuid;

use crate::config::QueryDefaults;
use crate::encode::Format;
use crate::http::response::ApiError;
use crate::records::{SortBy, SortDirection};
use crate::upstream::SearchRequest;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Raw listing query parameters as they arrive on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub count: Option<String>,
    pub sortby: Option<String>,
    pub sortdirection: Option<String>,
    pub format: Option<String>,
}

/// A listing request after defaulting and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingRequest {
    pub count: u64,
    pub sort_by: SortBy,
    pub sort_direction: SortDirection,
    pub format: Format,
}

impl ListingQuery {
    /// Resolve raw parameters against configured defaults.
    ///
    /// Only the sort parameters can fail; everything else falls back.
    pub fn resolve(&self, defaults: &QueryDefaults) -> Result<ListingRequest, ApiError> {
        let count = self
            .count
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|&count| count > 0)
            .unwrap_or(defaults.count);

        let sort_by = match self.sortby.as_deref() {
            None => defaults.sort_by,
            Some(raw) => SortBy::parse(raw)
                .ok_or_else(|| ApiError::invalid_parameter("sortby", &SortBy::VALID))?,
        };

        let sort_direction = match self.sortdirection.as_deref() {
            None => defaults.sort_direction,
            Some(raw) => SortDirection::parse(raw).ok_or_else(|| {
                ApiError::invalid_parameter("sortdirection", &SortDirection::VALID)
            })?,
        };

        let format = self
            .format
            .as_deref()
            .and_then(Format::parse)
            .unwrap_or(defaults.format);

        Ok(ListingRequest {
            count,
            sort_by,
            sort_direction,
            format,
        })
    }
}

impl ListingRequest {
    /// Wire body for the upstream search call.
    pub fn to_search_request(&self) -> SearchRequest {
        SearchRequest {
            count: self.count,
            sort_by: self.sort_by.ordinal(),
            sort_direction: self.sort_direction.ordinal(),
        }
    }
}

/// Layer that stamps requests with a UUID v4 `x-request-id` when absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service produced by [`RequestIdLayer`].
#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        if !request.headers().contains_key(X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                request.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(request)
    }
}
