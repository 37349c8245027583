//! Answer-section records reduced to the payloads we compare.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use hickory_resolver::proto::rr::{RData, Record, RecordType};

use crate::records::RecordKind;

/// One resource record from an answer section.
///
/// The variant is the record's actual type; [`RawAnswer::Other`] keeps the
/// type of anything we cannot verify so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAnswer {
    /// IPv4 address
    A(Ipv4Addr),
    /// IPv6 address
    Aaaa(Ipv6Addr),
    /// Pointer target, fully qualified as returned
    Ptr(String),
    /// Alias target, fully qualified as returned
    Cname(String),
    /// Character-strings of a TXT record, in wire order
    Txt(Vec<String>),
    /// Any other record type
    Other(RecordType),
}

impl RawAnswer {
    /// Converts a decoded record. Records without data become `Other`.
    pub fn from_record(record: &Record) -> Self {
        match record.data() {
            Some(RData::A(a)) => RawAnswer::A(a.0),
            Some(RData::AAAA(aaaa)) => RawAnswer::Aaaa(aaaa.0),
            Some(RData::PTR(ptr)) => RawAnswer::Ptr(ptr.0.to_utf8()),
            Some(RData::CNAME(cname)) => RawAnswer::Cname(cname.0.to_utf8()),
            Some(RData::TXT(txt)) => RawAnswer::Txt(
                txt.txt_data()
                    .iter()
                    .map(|segment| String::from_utf8_lossy(segment).into_owned())
                    .collect(),
            ),
            _ => RawAnswer::Other(record.record_type()),
        }
    }

    /// The verifiable kind of this record, if any.
    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            RawAnswer::A(_) => Some(RecordKind::A),
            RawAnswer::Aaaa(_) => Some(RecordKind::Aaaa),
            RawAnswer::Ptr(_) => Some(RecordKind::Ptr),
            RawAnswer::Cname(_) => Some(RecordKind::Cname),
            RawAnswer::Txt(_) => Some(RecordKind::Txt),
            RawAnswer::Other(_) => None,
        }
    }

    /// Record type mnemonic, e.g. `CNAME` or `MX`.
    pub fn type_name(&self) -> String {
        match self {
            RawAnswer::Other(record_type) => record_type.to_string(),
            _ => self.kind().map(|kind| kind.to_string()).unwrap_or_default(),
        }
    }
}

impl fmt::Display for RawAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAnswer::A(ip) => write!(f, "A {ip}"),
            RawAnswer::Aaaa(ip) => write!(f, "AAAA {ip}"),
            RawAnswer::Ptr(name) => write!(f, "PTR {name}"),
            RawAnswer::Cname(name) => write!(f, "CNAME {name}"),
            RawAnswer::Txt(segments) => write!(f, "TXT {segments:?}"),
            RawAnswer::Other(record_type) => write!(f, "{record_type}"),
        }
    }
}
