//! Submits one vehicle payload to the IOTA testnet as a tagged block.
//!
//! Two positional arguments post the payload hex directly; a third wraps
//! payload and timestamp in a JSON envelope first. Prints the block
//! identifier on success.

use std::process::ExitCode;
use std::sync::Arc;

use tangle_cli::{args, CliError};
use tangle_tx::{BlockSubmitClient, NodeConfig, RestBlockTransport, SubmitRequest};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    tangle_cli::init_tracing();
    match run().await {
        Ok(block_id) => {
            println!("{block_id}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("❌ {error}");
            ExitCode::FAILURE
        }
    }
}

/// Parses arguments, submits the block, and returns its identifier.
async fn run() -> Result<String, CliError> {
    let invocation = args::parse_submit(std::env::args().skip(1))
        .map_err(|source| CliError::Usage { source })?;

    let transport = RestBlockTransport::new(&NodeConfig::default())
        .map_err(|source| CliError::Node { source })?;
    let client = BlockSubmitClient::new(Arc::new(transport));

    let mut request = SubmitRequest::new(invocation.vehicle_id, invocation.payload_hex);
    if let Some(timestamp) = invocation.timestamp {
        request = request.with_timestamp(timestamp);
    }

    let result = client
        .submit(&request)
        .await
        .map_err(|source| CliError::Submit { source })?;
    info!(url = %result.explorer_url(), "block accepted");
    Ok(result.block_id)
}
