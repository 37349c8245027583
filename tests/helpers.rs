// Shared test helpers: a local fake nameserver and record builders.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::io::Write;
use std::net::{Ipv4Addr, SocketAddr};

use hickory_resolver::proto::op::{Message, MessageType, OpCode};
use hickory_resolver::proto::rr::rdata::{A, CNAME, TXT};
use hickory_resolver::proto::rr::{Name, RData, Record, RecordType};
use tempfile::NamedTempFile;
use tokio::net::UdpSocket;

/// Answers keyed by question name and type. Unknown questions get an empty answer section.
pub type Zone = HashMap<(String, RecordType), Vec<Record>>;

fn name(s: &str) -> Name {
    Name::from_ascii(s).expect("valid test name")
}

#[allow(dead_code)] // Used by other test files
pub fn a_record(owner: &str, ip: [u8; 4]) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(Ipv4Addr::from(ip))))
}

#[allow(dead_code)]
pub fn txt_record(owner: &str, segments: &[&str]) -> Record {
    Record::from_rdata(
        name(owner),
        300,
        RData::TXT(TXT::new(segments.iter().map(|s| s.to_string()).collect())),
    )
}

#[allow(dead_code)]
pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

/// Starts a UDP nameserver on 127.0.0.1 serving `zone`. Runs until the test's runtime stops.
#[allow(dead_code)]
pub async fn spawn_fake_nameserver(zone: Zone) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake nameserver");
    let addr = socket.local_addr().expect("bound socket has an address");

    tokio::spawn(async move {
        let mut buf = vec![0u8; 512];
        while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
            let Ok(request) = Message::from_vec(&buf[..len]) else {
                continue;
            };
            let mut response = Message::new();
            response
                .set_id(request.id())
                .set_message_type(MessageType::Response)
                .set_op_code(OpCode::Query)
                .set_recursion_desired(request.recursion_desired());
            for query in request.queries() {
                let key = (query.name().to_utf8(), query.query_type());
                if let Some(records) = zone.get(&key) {
                    response.add_answers(records.clone());
                }
            }
            response.add_queries(request.queries().to_vec());
            let bytes = response.to_vec().expect("response encodes");
            let _ = socket.send_to(&bytes, peer).await;
        }
    });

    addr
}

/// Binds a UDP socket that never answers. Keep it alive for the duration of the test.
#[allow(dead_code)]
pub async fn bind_silent_server() -> UdpSocket {
    UdpSocket::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind silent socket")
}

/// Writes an expected-records document to a temporary file.
#[allow(dead_code)]
pub fn write_records_file(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(yaml.as_bytes())
        .expect("Failed to write records");
    file.flush().expect("Failed to flush file");
    file
}
