//! Block submission client, transport boundary, and REST implementation.

/// Submission client implementation.
mod client;
/// REST transport against the node core API.
mod rest;
/// Shared submission types, errors, and the transport trait.
mod types;

pub use client::BlockSubmitClient;
pub use rest::RestBlockTransport;
pub use types::{
    BlockTransport, NodeConfig, PostedBlock, SubmitError, SubmitRequest, SubmitResult, TaggedData,
    TransportError, EXPLORER_BLOCK_URL, TESTNET_NODE_URL,
};
