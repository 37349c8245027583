//! Nameserver address resolution.
//!
//! The nameserver argument may be a literal IP address or a hostname. A
//! hostname is looked up with a single A query against the bootstrap
//! resolver.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use hickory_resolver::proto::rr::RecordType;
use log::{debug, error};

use super::answer::RawAnswer;
use super::client::QueryClient;
use super::message::fqdn;
use crate::config::EmptyAnswerPolicy;
use crate::error_handling::QueryError;

/// The server every record query is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nameserver {
    /// A usable address.
    Address(IpAddr),
    /// A hostname whose lookup failed; queries against it fail per name.
    Unresolved(String),
}

impl Nameserver {
    /// Socket address on `port`, or `None` when the nameserver is unresolved.
    pub fn socket_addr(&self, port: u16) -> Option<SocketAddr> {
        match self {
            Nameserver::Address(ip) => Some(SocketAddr::new(*ip, port)),
            Nameserver::Unresolved(_) => None,
        }
    }
}

impl fmt::Display for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nameserver::Address(ip) => write!(f, "{ip}"),
            Nameserver::Unresolved(host) => write!(f, "{host} (unresolved)"),
        }
    }
}

/// Turns the nameserver argument into a [`Nameserver`].
///
/// Literal addresses are returned unchanged. Hostnames are resolved with an A
/// query to `bootstrap`; when several A records come back the last one is
/// used, and non-A records are ignored.
///
/// A timeout or transport failure is logged and yields
/// `Nameserver::Unresolved`. An answer without any A record is handled by
/// `policy`.
///
/// # Errors
///
/// Returns `QueryError::EmptyAnswer` when the lookup has no A record and
/// `policy` is [`EmptyAnswerPolicy::Abort`].
pub async fn resolve_nameserver<C: QueryClient>(
    input: &str,
    client: &C,
    bootstrap: SocketAddr,
    policy: EmptyAnswerPolicy,
) -> Result<Nameserver, QueryError> {
    if let Ok(ip) = input.parse::<IpAddr>() {
        return Ok(Nameserver::Address(ip));
    }

    let target = fqdn(input);
    let answers = match client.query(&target, RecordType::A, bootstrap).await {
        Ok(answers) => answers,
        Err(QueryError::EmptyAnswer { .. }) => Vec::new(),
        Err(e) => {
            if e.is_timeout() {
                error!("[ERR] {input} query timed out");
            } else {
                error!("[ERR] {input} query failed: {e}");
            }
            return Ok(Nameserver::Unresolved(input.to_string()));
        }
    };

    let address = answers
        .iter()
        .filter_map(|answer| match answer {
            RawAnswer::A(ip) => Some(IpAddr::V4(*ip)),
            _ => None,
        })
        .last();

    match (address, policy) {
        (Some(ip), _) => {
            debug!("Resolved nameserver {input} to {ip} via {bootstrap}");
            Ok(Nameserver::Address(ip))
        }
        (None, EmptyAnswerPolicy::Abort) => Err(QueryError::EmptyAnswer { name: target }),
        (None, EmptyAnswerPolicy::Skip) => {
            error!("[ERR] {input} has no A records");
            Ok(Nameserver::Unresolved(input.to_string()))
        }
    }
}
