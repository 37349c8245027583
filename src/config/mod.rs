//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (ports, timeouts, output path)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, EmptyAnswerPolicy, LogFormat, LogLevel, TxtSegments};
