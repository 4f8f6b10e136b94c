//! Sort parameters for record search.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort field accepted by the records search API.
///
/// Declaration order matches the upstream enum; `ordinal` is the value the
/// search endpoint expects on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    CreationDate,
    LastUpdateDate,
    FirstPublishTime,
    TotalVisits,
    Name,
    Random,
}

impl SortBy {
    /// Accepted query-string spellings, in ordinal order.
    pub const VALID: [&'static str; 6] = [
        "CreationDate",
        "LastUpdateDate",
        "FirstPublishTime",
        "TotalVisits",
        "Name",
        "Random",
    ];

    /// Parse a query-string value. Exact match only.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CreationDate" => Some(Self::CreationDate),
            "LastUpdateDate" => Some(Self::LastUpdateDate),
            "FirstPublishTime" => Some(Self::FirstPublishTime),
            "TotalVisits" => Some(Self::TotalVisits),
            "Name" => Some(Self::Name),
            "Random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Wire ordinal for the upstream search body.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        Self::VALID[self as usize]
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for SortBy {
    fn default() -> Self {
        Self::TotalVisits
    }
}

/// Sort direction accepted by the records search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Accepted query-string spellings, in ordinal order.
    pub const VALID: [&'static str; 2] = ["Ascending", "Descending"];

    /// Parse a query-string value. Exact match only.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Ascending" => Some(Self::Ascending),
            "Descending" => Some(Self::Descending),
            _ => None,
        }
    }

    /// Wire ordinal for the upstream search body.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        Self::VALID[self as usize]
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Descending
    }
}
