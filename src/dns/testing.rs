//! In-process query client for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::net::SocketAddr;

use hickory_resolver::proto::rr::RecordType;

use super::answer::RawAnswer;
use super::client::QueryClient;
use crate::error_handling::QueryError;

/// Canned reply for one question.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Answers(Vec<RawAnswer>),
    Empty,
    Timeout,
}

/// Answers from a fixed table; unknown questions time out.
#[derive(Debug, Default)]
pub(crate) struct StaticClient {
    replies: HashMap<(String, RecordType), Reply>,
    calls: RefCell<Vec<(String, RecordType, SocketAddr)>>,
}

impl StaticClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, fqdn: &str, query_type: RecordType, reply: Reply) -> Self {
        self.replies.insert((fqdn.to_string(), query_type), reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, RecordType, SocketAddr)> {
        self.calls.borrow().clone()
    }
}

impl QueryClient for StaticClient {
    async fn query(
        &self,
        fqdn: &str,
        query_type: RecordType,
        server: SocketAddr,
    ) -> Result<Vec<RawAnswer>, QueryError> {
        self.calls
            .borrow_mut()
            .push((fqdn.to_string(), query_type, server));
        match self.replies.get(&(fqdn.to_string(), query_type)) {
            Some(Reply::Answers(answers)) => Ok(answers.clone()),
            Some(Reply::Empty) => Err(QueryError::EmptyAnswer {
                name: fqdn.to_string(),
            }),
            Some(Reply::Timeout) | None => Err(QueryError::Timeout {
                name: fqdn.to_string(),
                server,
            }),
        }
    }
}
