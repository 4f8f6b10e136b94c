//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, count > 0)
//! - Check the upstream endpoint is a usable http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a valid socket address")]
    BindAddress(String),

    #[error("upstream.search_url `{0}` is not an http(s) URL")]
    SearchUrl(String),

    #[error("upstream.timeout_secs must be greater than zero")]
    UpstreamTimeout,

    #[error("defaults.count must be greater than zero")]
    DefaultCount,

    #[error("timeouts.request_secs must be greater than zero")]
    RequestTimeout,
}

/// Validate a parsed configuration, collecting every violation.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.search_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::SearchUrl(
            config.upstream.search_url.clone(),
        )),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::UpstreamTimeout);
    }

    if config.defaults.count == 0 {
        errors.push(ValidationError::DefaultCount);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
