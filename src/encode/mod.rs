//! Record list encoding subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<RecordSummary> (upstream order, names already substituted)
//!     → mod.rs (format dispatch)
//!     → csv.rs | json.rs | binary.rs
//!     → Payload (body bytes + content-type label)
//! ```
//!
//! # Design Decisions
//! - Encoders are total functions: no failure path, no I/O
//! - Input order is preserved exactly; no sorting, dedup, or filtering
//! - Unrecognized format names never reach this module; the request layer
//!   resolves them to the configured default first

pub mod binary;
pub mod csv;
pub mod json;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::records::RecordSummary;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Csv,
    #[default]
    Binary,
}

impl Format {
    /// Parse a query-string value, ASCII case-insensitive.
    ///
    /// `None` for unrecognized values so the caller can fall back to its
    /// configured default instead of erroring.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if value.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if value.eq_ignore_ascii_case("binary") {
            Some(Self::Binary)
        } else {
            None
        }
    }

    /// Content type sent alongside a payload in this format.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
            Self::Binary => "text/plain",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoded record list plus its content-type label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

/// Encode summaries in the requested format.
pub fn encode(records: &[RecordSummary], format: Format) -> Payload {
    let body = match format {
        Format::Json => json::encode(records),
        Format::Csv => csv::encode(records),
        Format::Binary => binary::encode(records),
    };
    Payload {
        body,
        content_type: format.content_type(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Format::parse("JSON"), Some(Format::Json));
        assert_eq!(Format::parse("Csv"), Some(Format::Csv));
        assert_eq!(Format::parse("binary"), Some(Format::Binary));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(Format::parse("xml"), None);
        assert_eq!(Format::parse(""), None);
    }

    #[test]
    fn dispatch_labels_content_type() {
        let records = vec![RecordSummary::new(Some("Foo".into()), "U1", "R1")];
        assert_eq!(encode(&records, Format::Json).content_type, "application/json");
        assert_eq!(encode(&records, Format::Csv).content_type, "text/csv");
        assert_eq!(encode(&records, Format::Binary).content_type, "text/plain");
    }

    #[test]
    fn empty_input_encodes_in_every_format() {
        assert_eq!(encode(&[], Format::Json).body, b"[]");
        assert_eq!(encode(&[], Format::Csv).body, b"");
        assert_eq!(encode(&[], Format::Binary).body, b"0000000000000000");
    }
}
