//! REST query transport against the node core and indexer APIs.

use async_trait::async_trait;
use serde::Deserialize;

use super::BlockQueryTransport;
use crate::submit::{NodeConfig, TransportError};

/// REST transport that resolves and fetches tagged blocks.
#[derive(Debug, Clone)]
pub struct RestQueryTransport {
    /// HTTP client used for node calls.
    client: reqwest::Client,
    /// Node base URL.
    url: String,
}

impl RestQueryTransport {
    /// Creates a REST query transport for a node.
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

/// Response body for the indexer tag lookup.
#[derive(Debug, Deserialize)]
struct TagLookupResponse {
    /// Matching block ids.
    #[serde(default)]
    items: Vec<String>,
}

#[async_trait]
impl BlockQueryTransport for RestQueryTransport {
    async fn find_block_ids(
        &self,
        tag_hex: &str,
        limit: usize,
    ) -> Result<Vec<String>, TransportError> {
        let response = self
            .client
            .get(format!(
                "{}/api/indexer/v1/blocks?tag={tag_hex}&limit={limit}",
                self.url
            ))
            .send()
            .await
            .map_err(|error| TransportError::Failure {
                message: error.to_string(),
            })?;

        let response = response
            .error_for_status()
            .map_err(|error| TransportError::Failure {
                message: error.to_string(),
            })?;

        let parsed: TagLookupResponse =
            response
                .json()
                .await
                .map_err(|error| TransportError::Failure {
                    message: error.to_string(),
                })?;
        Ok(parsed.items)
    }

    async fn fetch_block(&self, block_id: &str) -> Result<serde_json::Value, TransportError> {
        let response = self
            .client
            .get(format!("{}/api/core/v2/blocks/{block_id}", self.url))
            .send()
            .await
            .map_err(|error| TransportError::Failure {
                message: error.to_string(),
            })?;

        let response = response
            .error_for_status()
            .map_err(|error| TransportError::Failure {
                message: error.to_string(),
            })?;

        response
            .json()
            .await
            .map_err(|error| TransportError::Failure {
                message: error.to_string(),
            })
    }
}
