//! dns_verify library: expected-record verification against a nameserver
//!
//! This library checks a set of expected DNS records for subdomains of one
//! domain against what a nameserver currently returns, and produces a YAML
//! change set describing every mismatch.
//!
//! # Example
//!
//! ```no_run
//! use dns_verify::{run_verification, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     config: std::path::PathBuf::from("records.yaml"),
//!     domain: "example.com".to_string(),
//!     nameserver: "ns1.example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_verification(config).await?;
//! println!("{} of {} records changed", report.changed, report.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Names are verified sequentially, so
//! a current-thread runtime is sufficient.

#![warn(missing_docs)]

pub mod changes;
pub mod config;
pub mod dns;
mod error_handling;
mod extract;
pub mod initialization;
pub mod records;
mod run;
pub mod verify;

// Re-export public API
pub use changes::{ChangeEntry, ChangeSet};
pub use config::{Config, EmptyAnswerPolicy, LogFormat, LogLevel, TxtSegments};
pub use error_handling::{
    ConfigError, InitializationError, OutputError, QueryError, TypeMismatchError, VerifyError,
};
pub use extract::extract_value;
pub use records::{ExpectedRecord, ExpectedRecordSet, RecordKind};
pub use run::{run_verification, VerificationReport};
pub use verify::{Outcome, Verifier, VerifyOptions};
