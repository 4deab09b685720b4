#![forbid(unsafe_code)]

//! Client SDK for tagging, submitting, and reading back vehicle payloads on the IOTA Tangle.

/// Tag, payload, and envelope encoding helpers.
pub mod encode;
/// Tagged-block read-back client and transports.
pub mod query;
/// Block submission client and transports.
pub mod submit;

pub use encode::{decode_hex_utf8, encode_tag, normalize_hex, strip_hex_prefix, EncodeError, Envelope};
pub use query::{
    BlockQueryClient, BlockQueryTransport, QueryError, RestQueryTransport, TaggedBlockRecord,
    DEFAULT_FETCH_LIMIT,
};
pub use submit::{
    BlockSubmitClient, BlockTransport, NodeConfig, PostedBlock, RestBlockTransport, SubmitError,
    SubmitRequest, SubmitResult, TaggedData, TransportError, EXPLORER_BLOCK_URL, TESTNET_NODE_URL,
};
