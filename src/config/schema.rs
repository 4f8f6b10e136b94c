//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. All types derive Serde traits for deserialization from config
//! files, and every section is defaulted so a minimal (or absent) config
//! works.

use serde::{Deserialize, Serialize};

use crate::encode::Format;
use crate::records::{SortBy, SortDirection};

/// Root configuration for the record gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream records API settings.
    pub upstream: UpstreamConfig,

    /// Defaults applied to absent or unusable query parameters.
    pub defaults: QueryDefaults,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream records API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Records search endpoint (POST target).
    pub search_url: String,

    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            search_url: "https://cloudx.azurewebsites.net/api/records/pagedSearch".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Defaults for the listing query surface.
///
/// The fallback `format` is configurable: deployed revisions of the
/// service disagreed on it (binary vs csv), so operators pick.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryDefaults {
    /// Record count requested when the client sends none.
    pub count: u64,

    /// Sort field when the client sends none.
    pub sort_by: SortBy,

    /// Sort direction when the client sends none.
    pub sort_direction: SortDirection,

    /// Output format for absent or unrecognized `format` values.
    pub format: Format,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            count: 1_000_000,
            sort_by: SortBy::TotalVisits,
            sort_direction: SortDirection::Descending,
            format: Format::Binary,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Inbound request timeout (total time for request/response) in
    /// seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
