//! Configuration constants.
//!
//! This module defines the defaults used throughout the application,
//! including ports, timeouts, buffer sizes, and output locations.

use std::net::{IpAddr, Ipv4Addr};

// Network
/// Port every DNS query is sent to.
pub const DNS_PORT: u16 = 53;
/// DNS query timeout in seconds
/// Matches the read deadline of common stub clients; a nameserver that has not
/// answered within 2s is reported as timed out for that name.
pub const DNS_TIMEOUT_SECS: u64 = 2;
/// Public resolver used to turn a nameserver hostname into an address.
pub const BOOTSTRAP_RESOLVER: IpAddr = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));
/// Largest UDP DNS response we accept.
/// EDNS0 allows up to 4096 bytes; anything larger would arrive truncated.
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;

// Output
/// Where the change set is written when `--output` is not given.
pub const DEFAULT_OUTPUT_PATH: &str = "./changes.yaml";
