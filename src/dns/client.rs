//! Single-question DNS client.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use hickory_resolver::proto::op::Message;
use hickory_resolver::proto::rr::RecordType;
use log::debug;
use tokio::net::UdpSocket;

use super::answer::RawAnswer;
use super::message::{build_query, parse_response};
use crate::config::{DNS_TIMEOUT_SECS, MAX_UDP_RESPONSE_SIZE};
use crate::error_handling::QueryError;

/// Sends one DNS question to one server.
///
/// Implementations return the answer section in server order. An empty
/// answer section is `QueryError::EmptyAnswer`, never `Ok(vec![])`.
#[allow(async_fn_in_trait)] // only used through generics, never as dyn
pub trait QueryClient {
    /// Asks `server` for `query_type` records of `fqdn`.
    async fn query(
        &self,
        fqdn: &str,
        query_type: RecordType,
        server: SocketAddr,
    ) -> Result<Vec<RawAnswer>, QueryError>;
}

/// [`QueryClient`] over UDP, one socket per query.
#[derive(Debug, Clone)]
pub struct UdpQueryClient {
    timeout: Duration,
}

impl Default for UdpQueryClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(DNS_TIMEOUT_SECS))
    }
}

impl UdpQueryClient {
    /// Creates a client whose exchanges fail with `QueryError::Timeout` after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The per-exchange deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn exchange(
        &self,
        fqdn: &str,
        query_type: RecordType,
        server: SocketAddr,
    ) -> Result<Message, QueryError> {
        let (id, request) = build_query(fqdn, query_type)?;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|source| QueryError::Io { server, source })?;

        let round_trip = async {
            socket
                .send_to(&request, server)
                .await
                .map_err(|source| QueryError::Io { server, source })?;
            debug!("Sent {query_type} query for {fqdn} to {server} (id {id})");
            receive_response(&socket, server, id).await
        };

        tokio::time::timeout(self.timeout, round_trip)
            .await
            .map_err(|_| QueryError::Timeout {
                name: fqdn.to_string(),
                server,
            })?
    }
}

/// Waits for the datagram from `server` that answers query `id`.
///
/// Datagrams from other addresses or with other IDs are dropped.
async fn receive_response(
    socket: &UdpSocket,
    server: SocketAddr,
    id: u16,
) -> Result<Message, QueryError> {
    let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
    loop {
        let (len, from) = socket
            .recv_from(&mut buf)
            .await
            .map_err(|source| QueryError::Io { server, source })?;

        if from.ip() != server.ip() {
            debug!("Ignoring datagram from unexpected source {from} (expected {server})");
            continue;
        }

        let response = parse_response(&buf[..len])?;
        if response.id() != id {
            debug!(
                "Ignoring response with id {} while waiting for {id}",
                response.id()
            );
            continue;
        }
        return Ok(response);
    }
}

impl QueryClient for UdpQueryClient {
    async fn query(
        &self,
        fqdn: &str,
        query_type: RecordType,
        server: SocketAddr,
    ) -> Result<Vec<RawAnswer>, QueryError> {
        let response = self.exchange(fqdn, query_type, server).await?;

        if response.truncated() {
            debug!("Response for {fqdn} from {server} was truncated");
        }
        debug!(
            "{server} answered {fqdn} {query_type} with {} ({} answer(s))",
            response.response_code(),
            response.answers().len()
        );

        let answers: Vec<RawAnswer> = response
            .answers()
            .iter()
            .map(RawAnswer::from_record)
            .collect();
        if answers.is_empty() {
            return Err(QueryError::EmptyAnswer {
                name: fqdn.to_string(),
            });
        }
        Ok(answers)
    }
}
