//! Per-name record verification.
//!
//! For one configured name the [`Verifier`]:
//! 1. Builds `<name>.<domain>.` and queries the nameserver for the configured type
//! 2. Extracts a value from every answer, in order
//! 3. Compares each value with the expected one and records mismatches
//!
//! Diagnostics are tagged `[OK]`, `[CHG]` or `[ERR]`. Only an empty answer
//! under [`EmptyAnswerPolicy::Abort`] ends the run; every other failure is
//! reported and the caller moves on to the next name.

use log::{debug, error, info, warn};

use crate::changes::ChangeSet;
use crate::config::{EmptyAnswerPolicy, TxtSegments, DNS_PORT};
use crate::dns::{fqdn, Nameserver, QueryClient};
use crate::error_handling::{QueryError, VerifyError};
use crate::extract::extract_value;
use crate::records::ExpectedRecord;

/// Result of verifying one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every answer matched the expected value.
    Matched,
    /// At least one answer differed; `observed` is the last differing value.
    Changed {
        /// Value recorded as `delete` in the change set.
        observed: String,
    },
    /// An answer had a different record type; nothing was recorded.
    TypeMismatch {
        /// Configured type.
        expected: String,
        /// Type found in the answer.
        actual: String,
    },
    /// The query timed out.
    TimedOut,
    /// The query could not be sent or its response could not be read.
    QueryFailed(String),
    /// The answer section was empty (only under [`EmptyAnswerPolicy::Skip`]).
    NoAnswers,
    /// The configured type is not one we verify; no query was sent.
    Unsupported(String),
}

impl Outcome {
    /// `true` for outcomes where the name could not be checked.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::TypeMismatch { .. }
                | Outcome::TimedOut
                | Outcome::QueryFailed(_)
                | Outcome::NoAnswers
        )
    }
}

/// Knobs for [`Verifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Port queries are sent to.
    pub port: u16,
    /// Handling of empty answer sections.
    pub empty_answer: EmptyAnswerPolicy,
    /// Which TXT strings are compared.
    pub txt_segments: TxtSegments,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            port: DNS_PORT,
            empty_answer: EmptyAnswerPolicy::Abort,
            txt_segments: TxtSegments::First,
        }
    }
}

/// Verifies configured records of one domain against one nameserver.
#[derive(Debug)]
pub struct Verifier<C> {
    client: C,
    domain: String,
    nameserver: Nameserver,
    options: VerifyOptions,
}

impl<C: QueryClient> Verifier<C> {
    /// Creates a verifier for subdomains of `domain` served by `nameserver`.
    pub fn new(
        client: C,
        domain: impl Into<String>,
        nameserver: Nameserver,
        options: VerifyOptions,
    ) -> Self {
        Self {
            client,
            domain: domain.into(),
            nameserver,
            options,
        }
    }

    /// Checks `name` against `expected`, recording a mismatch in `changes`.
    ///
    /// Every answer is compared; when several differ the entry holds the last
    /// one. A type mismatch on any answer stops processing of the name and
    /// discards mismatches already seen for it.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::NoAnswers` when the answer section is empty and
    /// the empty-answer policy is `Abort`.
    pub async fn verify(
        &self,
        name: &str,
        expected: &ExpectedRecord,
        changes: &mut ChangeSet,
    ) -> Result<Outcome, VerifyError> {
        let label = format!("{name}.{}", self.domain);
        let target = fqdn(&label);

        let Some(kind) = expected.kind() else {
            debug!(
                "Skipping {label}: record type {} is not verified",
                expected.record_type
            );
            return Ok(Outcome::Unsupported(expected.record_type.clone()));
        };

        let Some(server) = self.nameserver.socket_addr(self.options.port) else {
            error!(
                "[ERR] {label} query failed: nameserver {} has no usable address",
                self.nameserver
            );
            return Ok(Outcome::QueryFailed(format!(
                "nameserver {} has no usable address",
                self.nameserver
            )));
        };

        let answers = match self.client.query(&target, kind.query_type(), server).await {
            Ok(answers) => answers,
            Err(QueryError::EmptyAnswer { .. }) => return self.on_empty_answer(&label, target),
            Err(e) if e.is_timeout() => {
                error!("[ERR] {label} query timed out");
                return Ok(Outcome::TimedOut);
            }
            Err(e) => {
                error!("[ERR] {label} query failed: {e}");
                return Ok(Outcome::QueryFailed(e.to_string()));
            }
        };

        // Committed only once every answer has the configured type
        let mut pending: Option<String> = None;
        for answer in &answers {
            debug!("{label}: answer {answer}");
            let observed = match extract_value(answer, kind, &target, self.options.txt_segments) {
                Ok(value) => value,
                Err(mismatch) => {
                    error!("[ERR] {mismatch}");
                    return Ok(Outcome::TypeMismatch {
                        expected: mismatch.expected,
                        actual: mismatch.actual,
                    });
                }
            };

            if observed == expected.value {
                info!("[OK] {label} records matched");
            } else {
                warn!("[CHG] {label} records did not match");
                debug!(
                    "{label}: expected {:?}, nameserver returned {observed:?}",
                    expected.value
                );
                pending = Some(observed);
            }
        }

        Ok(match pending {
            Some(observed) => {
                changes.record(name, &expected.value, &observed);
                Outcome::Changed { observed }
            }
            None => Outcome::Matched,
        })
    }

    fn on_empty_answer(&self, label: &str, target: String) -> Result<Outcome, VerifyError> {
        match self.options.empty_answer {
            EmptyAnswerPolicy::Abort => {
                error!("[ERR] {label} returned no results");
                Err(VerifyError::NoAnswers { name: target })
            }
            EmptyAnswerPolicy::Skip => {
                error!("[ERR] {label} returned no results, skipping");
                Ok(Outcome::NoAnswers)
            }
        }
    }
}
