//! Tagged-block read-back client, transport boundary, and REST implementation.

/// Query client implementation.
mod client;
/// REST transport against the node core and indexer APIs.
mod rest;
#[cfg(test)]
/// Query module unit tests.
mod tests;
/// Shared query types, errors, and the transport trait.
mod types;

pub use client::BlockQueryClient;
pub use rest::RestQueryTransport;
pub use types::{BlockQueryTransport, QueryError, TaggedBlockRecord, DEFAULT_FETCH_LIMIT};
