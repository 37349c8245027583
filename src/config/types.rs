//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    BOOTSTRAP_RESOLVER, DEFAULT_OUTPUT_PATH, DNS_PORT, DNS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What to do when a nameserver answers with an empty answer section.
///
/// `Abort` stops the whole run without writing a change set. `Skip` reports
/// the name as failed and moves on to the next one. The same policy applies
/// to the bootstrap lookup of a nameserver hostname.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum EmptyAnswerPolicy {
    /// Terminate the run on the first empty answer
    #[default]
    Abort,
    /// Treat an empty answer as a per-name failure
    Skip,
}

/// Which part of a TXT record is compared against the expected value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum TxtSegments {
    /// Only the first character-string of the record
    #[default]
    First,
    /// Every character-string of the record joined without separator
    Concatenate,
}

/// Verification configuration.
///
/// Parsed from the command line by the binary, or constructed directly by
/// library users.
///
/// # Examples
///
/// ```no_run
/// use dns_verify::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     config: PathBuf::from("records.yaml"),
///     domain: "example.com".to_string(),
///     nameserver: "ns1.example.com".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns_verify",
    version,
    about = "Check expected DNS records against a nameserver and write a change set"
)]
pub struct Config {
    /// Load expected records from `FILE`
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// Domain to query against
    #[arg(short = 'd', long)]
    pub domain: String,

    /// Nameserver to query against (IP address or hostname)
    #[arg(short = 'n', long, value_name = "ADDR_OR_HOST")]
    pub nameserver: String,

    /// Where to write the change set
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Resolver used to look up a nameserver given by hostname
    #[arg(long, default_value_t = BOOTSTRAP_RESOLVER)]
    pub bootstrap: IpAddr,

    /// Port the nameserver and bootstrap resolver listen on
    #[arg(long, default_value_t = DNS_PORT)]
    pub port: u16,

    /// Per-query timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Behaviour when a query returns no answers
    #[arg(long, value_enum, default_value_t = EmptyAnswerPolicy::Abort)]
    pub on_empty_answer: EmptyAnswerPolicy,

    /// Which TXT character-strings to compare
    #[arg(long, value_enum, default_value_t = TxtSegments::First)]
    pub txt_segments: TxtSegments,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Per-query deadline as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: PathBuf::from("records.yaml"),
            domain: String::new(),
            nameserver: String::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            bootstrap: BOOTSTRAP_RESOLVER,
            port: DNS_PORT,
            timeout_seconds: DNS_TIMEOUT_SECS,
            on_empty_answer: EmptyAnswerPolicy::Abort,
            txt_segments: TxtSegments::First,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
