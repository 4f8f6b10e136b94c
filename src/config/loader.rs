//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::Format;
    use crate::records::SortBy;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.defaults.count, 1_000_000);
        assert_eq!(config.defaults.format, Format::Binary);
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn overrides_apply_per_section() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upstream]
            search_url = "http://localhost:9000/api/records/pagedSearch"

            [defaults]
            count = 50
            sort_by = "Name"
            format = "csv"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.upstream.search_url,
            "http://localhost:9000/api/records/pagedSearch"
        );
        assert_eq!(config.defaults.count, 50);
        assert_eq!(config.defaults.sort_by, SortBy::Name);
        assert_eq!(config.defaults.format, Format::Csv);
        // untouched sections keep defaults
        assert_eq!(config.upstream.timeout_secs, 30);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/gateway.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
