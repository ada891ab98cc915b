//! Library entry point for hub CLI components.
//!
//! Exposes reusable modules (formatter, storage, config, etc.) so
//! integration tests and other crates can leverage CLI formatting and
//! behaviors without going through the binary entry point.

pub mod config;
pub mod error;
pub mod formatter;
pub mod helpers;
pub mod storage;

pub use config::CLIConfiguration;
pub use error::{CLIError, Result};
pub use formatter::{OutputFormat, OutputFormatter};
pub use storage::FileSessionStorage;
