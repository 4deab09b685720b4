//! REST block transport against the node core API.

use async_trait::async_trait;

use super::{BlockTransport, NodeConfig, PostedBlock, TaggedData, TransportError};
use crate::encode::normalize_hex;

/// Protocol version expected by the testnet core API.
const PROTOCOL_VERSION: u8 = 2;

/// Tagged-data payload type in the node core API.
const TAGGED_DATA_PAYLOAD_TYPE: u8 = 5;

/// REST transport that posts tagged-data blocks to one node.
///
/// Parent selection and proof of work are left to the node; submission is
/// anonymous and carries no managed secret.
#[derive(Debug, Clone)]
pub struct RestBlockTransport {
    /// HTTP client used for node calls.
    client: reqwest::Client,
    /// Node base URL.
    url: String,
}

impl RestBlockTransport {
    /// Creates a REST transport for a node.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Config`] when HTTP client creation fails.
    pub fn new(config: &NodeConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|error| TransportError::Config {
                message: error.to_string(),
            })?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl BlockTransport for RestBlockTransport {
    async fn post_block(&self, payload: &TaggedData) -> Result<PostedBlock, TransportError> {
        // The core API wants 0x-prefixed hex in its JSON fields.
        let body = serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "payload": {
                "type": TAGGED_DATA_PAYLOAD_TYPE,
                "tag": normalize_hex(&payload.tag),
                "data": normalize_hex(&payload.data),
            }
        });

        let response = self
            .client
            .post(format!("{}/api/core/v2/blocks", self.url))
            .json(&body)
            .send()
            .await
            .map_err(|error| TransportError::Failure {
                message: error.to_string(),
            })?;

        let status = response.status();
        let parsed: serde_json::Value =
            response
                .json()
                .await
                .map_err(|error| TransportError::Failure {
                    message: error.to_string(),
                })?;

        if let Some(block_id) = parsed.get("blockId").and_then(serde_json::Value::as_str) {
            return Ok(PostedBlock {
                block_id: block_id.to_owned(),
                raw: parsed,
            });
        }
        if let Some(error) = parsed.get("error") {
            let code = error
                .get("code")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown");
            let message = error
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("no message");
            return Err(TransportError::Failure {
                message: format!("node error {code}: {message}"),
            });
        }

        Err(TransportError::Failure {
            message: format!("node returned status {status} without a block id"),
        })
    }
}
