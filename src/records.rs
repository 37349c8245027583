//! Expected records and their loader.
//!
//! The configuration file is a YAML mapping from subdomain label to the
//! record that label is expected to carry:
//!
//! ```yaml
//! web:
//!   type: A
//!   value: 10.0.0.5
//! _acme:
//!   type: TXT
//!   value: "token-123"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use hickory_resolver::proto::rr::RecordType;
use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error_handling::ConfigError;

/// Record types that can be verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum RecordKind {
    /// IPv4 address
    #[strum(serialize = "A")]
    A,
    /// IPv6 address
    #[strum(serialize = "AAAA")]
    Aaaa,
    /// Reverse pointer
    #[strum(serialize = "PTR")]
    Ptr,
    /// Alias
    #[strum(serialize = "CNAME")]
    Cname,
    /// Text
    #[strum(serialize = "TXT")]
    Txt,
}

impl RecordKind {
    /// DNS query type used to ask for this kind.
    pub fn query_type(self) -> RecordType {
        match self {
            RecordKind::A => RecordType::A,
            RecordKind::Aaaa => RecordType::AAAA,
            RecordKind::Ptr => RecordType::PTR,
            RecordKind::Cname => RecordType::CNAME,
            RecordKind::Txt => RecordType::TXT,
        }
    }
}

/// One configured record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpectedRecord {
    /// Record type tag as written in the config (`A`, `AAAA`, `PTR`, `CNAME`, `TXT`).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Expected canonical value.
    #[serde(default)]
    pub value: String,
}

impl ExpectedRecord {
    /// Creates a record from a type tag and value.
    pub fn new(record_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            value: value.into(),
        }
    }

    /// The verifiable kind, or `None` when the tag is not a supported type.
    ///
    /// Tags are matched case-sensitively.
    pub fn kind(&self) -> Option<RecordKind> {
        RecordKind::from_str(&self.record_type).ok()
    }
}

/// Expected records keyed by subdomain label.
pub type ExpectedRecordSet = BTreeMap<String, ExpectedRecord>;

/// Parses an expected-records document.
///
/// An empty (or whitespace-only) document is an empty set.
pub fn parse_expected_records(content: &str) -> Result<ExpectedRecordSet, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(ExpectedRecordSet::new());
    }
    serde_yaml::from_str(content)
}

/// Reads and parses the expected-records file at `path`.
///
/// # Errors
///
/// Returns `ConfigError::Read` if the file cannot be read and
/// `ConfigError::Parse` if it is not a mapping of label to `{type, value}`.
pub fn load_expected_records(path: &Path) -> Result<ExpectedRecordSet, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_expected_records(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
