#![forbid(unsafe_code)]

//! Command-line front end for the tangle-tx submission and query clients.

use thiserror::Error;

use tangle_tx::{QueryError, SubmitError, TransportError};

/// Positional argument parsing.
pub mod args;

pub use args::{FetchInvocation, SubmitInvocation, UsageError};

/// Top-level CLI failures, formatted for the error stream.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing failed.
    #[error("Error: {source}")]
    Usage {
        /// Argument-layer failure.
        source: UsageError,
    },
    /// Node transport could not be constructed.
    #[error("Error: {source}")]
    Node {
        /// Transport-layer failure.
        source: TransportError,
    },
    /// Block submission failed.
    #[error("Error sending to IOTA: {source}")]
    Submit {
        /// Submission-layer failure.
        source: SubmitError,
    },
    /// Block read-back failed.
    #[error("Error fetching from IOTA: {source}")]
    Fetch {
        /// Query-layer failure.
        source: QueryError,
    },
}

/// Initializes process-wide tracing with an env-filter override.
///
/// Events go to stderr so stdout stays reserved for command output.
pub fn init_tracing() {
    if tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        // Tracing was already initialized by an embedding host.
    }
}
