//! Run orchestration.
//!
//! Loads the expected records, resolves the nameserver, verifies every name
//! in turn and writes the change set.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::info;

use crate::changes::ChangeSet;
use crate::config::Config;
use crate::dns::{resolve_nameserver, UdpQueryClient};
use crate::records::load_expected_records;
use crate::verify::{Outcome, Verifier, VerifyOptions};

/// Results of a verification run.
#[derive(Debug, Clone)]
pub struct VerificationReport {
    /// Number of configured names.
    pub total: usize,
    /// Names whose answers all matched.
    pub matched: usize,
    /// Names with a recorded change.
    pub changed: usize,
    /// Names that could not be checked (timeout, query error, type mismatch, no answers).
    pub failed: usize,
    /// Names with an unsupported record type.
    pub skipped: usize,
    /// The change set that was written.
    pub changes: ChangeSet,
    /// The YAML document written to `output_path`.
    pub rendered: String,
    /// Where the change set was written.
    pub output_path: PathBuf,
}

impl VerificationReport {
    fn new(total: usize, output_path: PathBuf) -> Self {
        Self {
            total,
            matched: 0,
            changed: 0,
            failed: 0,
            skipped: 0,
            changes: ChangeSet::new(),
            rendered: String::new(),
            output_path,
        }
    }

    fn tally(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Matched => self.matched += 1,
            Outcome::Changed { .. } => self.changed += 1,
            Outcome::Unsupported(_) => self.skipped += 1,
            _ => self.failed += 1,
        }
    }
}

/// Verifies every configured record and writes the change set.
///
/// Names are processed one at a time in label order. The change set is
/// written to `config.output` only after the last name; a fatal error
/// returns early and nothing is written.
///
/// # Errors
///
/// Returns an error if:
/// - `domain` or `nameserver` is blank
/// - the config file is missing or malformed
/// - an empty answer is seen under the abort policy
/// - the change set cannot be written
pub async fn run_verification(config: Config) -> Result<VerificationReport> {
    if config.domain.trim().is_empty() {
        bail!("please specify a domain");
    }
    if config.nameserver.trim().is_empty() {
        bail!("please specify a nameserver");
    }

    let records =
        load_expected_records(&config.config).context("Failed to load expected records")?;

    let client = UdpQueryClient::new(config.timeout());
    let bootstrap = SocketAddr::new(config.bootstrap, config.port);
    let nameserver = resolve_nameserver(
        &config.nameserver,
        &client,
        bootstrap,
        config.on_empty_answer,
    )
    .await
    .with_context(|| format!("Failed to resolve nameserver {}", config.nameserver))?;

    info!(
        "Verifying {} record(s) of {} against {}",
        records.len(),
        config.domain,
        nameserver
    );

    let options = VerifyOptions {
        port: config.port,
        empty_answer: config.on_empty_answer,
        txt_segments: config.txt_segments,
    };
    let verifier = Verifier::new(client, config.domain.as_str(), nameserver, options);

    let mut report = VerificationReport::new(records.len(), config.output.clone());
    let mut changes = ChangeSet::new();
    for (name, expected) in &records {
        let outcome = verifier
            .verify(name, expected, &mut changes)
            .await
            .context("Verification aborted")?;
        report.tally(&outcome);
    }

    report.rendered = changes
        .write_to(&config.output)
        .context("Verification finished but the change set could not be saved")?;
    report.changes = changes;

    info!(
        "{} record(s): {} matched, {} changed, {} failed, {} skipped",
        report.total, report.matched, report.changed, report.failed, report.skipped
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_buckets() {
        let mut report = VerificationReport::new(6, PathBuf::from("changes.yaml"));
        for outcome in [
            Outcome::Matched,
            Outcome::Changed {
                observed: "10.0.0.9".to_string(),
            },
            Outcome::TimedOut,
            Outcome::NoAnswers,
            Outcome::TypeMismatch {
                expected: "TXT".to_string(),
                actual: "A".to_string(),
            },
            Outcome::Unsupported("MX".to_string()),
        ] {
            report.tally(&outcome);
        }

        assert_eq!(report.matched, 1);
        assert_eq!(report.changed, 1);
        assert_eq!(report.failed, 3);
        assert_eq!(report.skipped, 1);
    }

    #[tokio::test]
    async fn test_blank_domain_is_rejected_before_loading() {
        let config = Config {
            config: PathBuf::from("/nonexistent/records.yaml"),
            domain: " ".to_string(),
            nameserver: "10.0.0.1".to_string(),
            ..Default::default()
        };
        let err = run_verification(config).await.expect_err("blank domain");
        assert_eq!(err.to_string(), "please specify a domain");
    }

    #[tokio::test]
    async fn test_missing_config_file_is_fatal() {
        let config = Config {
            config: PathBuf::from("/nonexistent/records.yaml"),
            domain: "example.com".to_string(),
            nameserver: "10.0.0.1".to_string(),
            ..Default::default()
        };
        let err = run_verification(config).await.expect_err("missing file");
        assert!(format!("{err:#}").contains("Failed to load expected records"));
    }
}
