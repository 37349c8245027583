//! DNS wire messages.
//!
//! Builds single-question query messages and decodes responses using the
//! `hickory-proto` types re-exported by `hickory-resolver`.

use hickory_resolver::proto::op::{Message, MessageType, OpCode, Query};
use hickory_resolver::proto::rr::{Name, RecordType};

use crate::error_handling::QueryError;

/// Builds a recursive query for `fqdn` and serializes it.
///
/// Creates a standard query with:
/// - Random ID for request/response matching
/// - RD (Recursion Desired) flag set
/// - Single question of class IN
///
/// # Returns
///
/// The message ID and the wire-format bytes.
///
/// # Errors
///
/// Returns `QueryError::InvalidName` if `fqdn` is not a valid domain name and
/// `QueryError::Malformed` if encoding fails.
pub fn build_query(fqdn: &str, query_type: RecordType) -> Result<(u16, Vec<u8>), QueryError> {
    let name = Name::from_ascii(fqdn).map_err(|e| QueryError::InvalidName {
        name: fqdn.to_string(),
        reason: e.to_string(),
    })?;

    let id: u16 = rand::random();
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(name, query_type));

    let bytes = message
        .to_vec()
        .map_err(|e| QueryError::Malformed(format!("failed to encode query for {fqdn}: {e}")))?;
    Ok((id, bytes))
}

/// Decodes a response datagram.
pub fn parse_response(bytes: &[u8]) -> Result<Message, QueryError> {
    Message::from_vec(bytes)
        .map_err(|e| QueryError::Malformed(format!("failed to parse DNS response: {e}")))
}

/// Appends the root label to `name` unless it is already fully qualified.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
