//! Minimal Solana JSON-RPC client.
//!
//! The demo needs exactly one RPC method (`getBalance`), so requests are
//! issued with `reqwest` and `serde_json` directly instead of a full SDK
//! client.

use std::time::Duration;

use serde_json::json;
use tracing::debug;

use crate::address;
use crate::error::SolError;

/// How finalized the queried block state must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commitment {
    /// Most recent block, possibly still subject to reorg.
    Processed,
    /// Most recent block voted on by a supermajority of the cluster.
    #[default]
    Confirmed,
    /// Most recent block that has been rooted.
    Finalized,
}

impl Commitment {
    /// Wire form of the commitment level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

/// JSON-RPC client bound to one endpoint and commitment level.
pub struct RpcClient {
    endpoint: String,
    commitment: Commitment,
    http: reqwest::Client,
}

impl RpcClient {
    /// Create a client for `endpoint`, reading at `commitment`.
    pub fn new(endpoint: impl Into<String>, commitment: Commitment) -> Result<Self, SolError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SolError::Rpc(format!("failed to build http client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            commitment,
            http,
        })
    }

    /// The commitment level requests are issued with.
    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// Native balance of `address` in lamports.
    pub async fn get_balance(&self, address: &str) -> Result<u64, SolError> {
        address::validate_address(address)?;

        let request_body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBalance",
            "params": [address, { "commitment": self.commitment.as_str() }],
        });

        debug!(address, endpoint = %self.endpoint, "querying balance");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SolError::Rpc(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SolError::Rpc(format!(
                "request failed with status: {}",
                response.status()
            )));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SolError::Rpc(format!("failed to parse response: {e}")))?;

        if let Some(error) = response_json.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error");
            return Err(SolError::Rpc(message.to_string()));
        }

        response_json
            .pointer("/result/value")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| SolError::Rpc("missing balance in response".to_string()))
    }
}
