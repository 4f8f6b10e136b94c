//! Response construction and error envelopes.
//!
//! # Responsibilities
//! - Attach the format's content-type label to encoded payloads
//! - Map the two terminal error kinds to their status codes
//! - Render the `{code, message}` JSON envelope
//!
//! # Design Decisions
//! - Error bodies are ALWAYS JSON, even when the caller asked for csv or
//!   binary output; existing consumers depend on this inconsistency
//! - The upstream failure message is fixed regardless of the underlying
//!   cause; detail goes to logs only

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::encode::Payload;
use crate::upstream::UpstreamError;

/// Client-visible message for any upstream failure.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "API Request Failed, Rate limited or API is down";

/// JSON error envelope returned for all request failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

/// Terminal request errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-supplied parameter outside the enumerated set.
    #[error("{0}")]
    InvalidParameter(String),

    /// The records API call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    /// Build the 400 error for a parameter, naming its valid values.
    pub fn invalid_parameter(param: &str, valid: &[&str]) -> Self {
        Self::InvalidParameter(format!(
            "{param} parameter is invalid. valid values are {}",
            valid.join(", ")
        ))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::InvalidParameter(message) => message.clone(),
            Self::Upstream(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            code: status.as_u16(),
            message: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for Payload {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}
