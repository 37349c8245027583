//! Error type definitions.
//!
//! This module defines the error types used throughout the application,
//! one enum per layer.

use std::net::SocketAddr;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors loading the expected-records file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid record mapping.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors from a single DNS exchange.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The question name is not a valid domain name.
    #[error("invalid query name {name}: {reason}")]
    InvalidName {
        /// Name as given.
        name: String,
        /// Parser message.
        reason: String,
    },

    /// No matching response arrived before the deadline.
    #[error("query for {name} to {server} timed out")]
    Timeout {
        /// Question name.
        name: String,
        /// Server queried.
        server: SocketAddr,
    },

    /// The response carried no answer records.
    #[error("no answers for {name}")]
    EmptyAnswer {
        /// Question name.
        name: String,
    },

    /// Socket-level failure.
    #[error("network error querying {server}: {source}")]
    Io {
        /// Server queried.
        server: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The query could not be encoded or the response could not be decoded.
    #[error("malformed DNS message: {0}")]
    Malformed(String),
}

impl QueryError {
    /// Returns `true` for a query that got no response in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QueryError::Timeout { .. })
    }
}

/// An answer's record type differs from the configured one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name} is not a type {expected} record it is a type {actual} record")]
pub struct TypeMismatchError {
    /// Fully-qualified name that was queried.
    pub name: String,
    /// Configured record type.
    pub expected: String,
    /// Record type observed in the answer.
    pub actual: String,
}

/// Fatal conditions raised while verifying a name.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Empty answer section under [`crate::EmptyAnswerPolicy::Abort`].
    #[error("no results for {name}")]
    NoAnswers {
        /// Fully-qualified name that was queried.
        name: String,
    },
}

/// Errors producing the change-set document.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Rendering or parsing YAML failed.
    #[error("failed to serialize change set: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// Writing the rendered document failed.
    #[error("failed to write change set to {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
