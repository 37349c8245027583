//! DNS querying.
//!
//! This module provides the pieces that talk to nameservers:
//! - Query message construction and response decoding (`hickory-proto`)
//! - A UDP client that sends one question to one server
//! - Nameserver address resolution through a bootstrap resolver
//!
//! Queries are sent one at a time; nothing is cached or retried.

mod address;
mod answer;
mod client;
mod message;

// Re-export public API
pub use address::{resolve_nameserver, Nameserver};
pub use answer::RawAnswer;
pub use client::{QueryClient, UdpQueryClient};
pub use message::{build_query, fqdn, parse_response};

#[cfg(test)]
pub(crate) mod testing;
