//! Error handling.
//!
//! Error types are split by where they can occur:
//! - **Fatal before any query**: [`ConfigError`], [`InitializationError`]
//! - **Per name, recoverable**: [`QueryError`] (except an empty answer under the
//!   abort policy) and [`TypeMismatchError`]
//! - **Fatal during the run**: [`VerifyError`]
//! - **Fatal after the run**: [`OutputError`]

mod types;

// Re-export public API
pub use types::{
    ConfigError, InitializationError, OutputError, QueryError, TypeMismatchError, VerifyError,
};
