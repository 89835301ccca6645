//! JSON-RPC client over HTTP.

use alloy::primitives::{Address, Bytes, B256};
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};

use enskit_core::error::{EnsError, Result};
use enskit_core::traits::RpcTransport;
use enskit_core::types::SimpleTransactionRequest;

use crate::config::RpcConfig;

/// Ethereum JSON-RPC client.
pub struct RpcClient {
    config: RpcConfig,
    http_client: reqwest::Client,
    chain_id: OnceCell<u64>,
}

impl RpcClient {
    /// Creates a new client with default configuration for `rpc_url`.
    pub fn new(rpc_url: impl Into<String>) -> Result<Self> {
        Self::with_config(RpcConfig::new(rpc_url))
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: RpcConfig) -> Result<Self> {
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| EnsError::ConfigError(format!("failed to create HTTP client: {e}")))?;

        let chain_id = match config.chain_id {
            Some(id) => OnceCell::new_with(Some(id)),
            None => OnceCell::new(),
        };

        Ok(Self {
            config,
            http_client,
            chain_id,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Makes a JSON-RPC call and returns the `result` member.
    #[instrument(skip(self, params))]
    pub async fn rpc_call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        let response = self
            .http_client
            .post(&self.config.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let json: serde_json::Value = response.json().await.map_err(map_reqwest_error)?;

        if let Some(error) = json.get("error") {
            return Err(parse_rpc_error(method, error));
        }

        json.get("result")
            .cloned()
            .ok_or_else(|| EnsError::RpcError {
                code: 0,
                message: format!("{method}: response has neither result nor error"),
            })
    }
}

#[async_trait]
impl RpcTransport for RpcClient {
    async fn chain_id(&self) -> Result<u64> {
        self.chain_id
            .get_or_try_init(|| async {
                let result = self.rpc_call("eth_chainId", serde_json::json!([])).await?;
                let id = parse_quantity(&result)?;
                debug!(chain_id = id, "Fetched chain id");
                Ok::<u64, EnsError>(id)
            })
            .await
            .copied()
    }

    #[instrument(skip(self, request), fields(to = %request.to))]
    async fn call(&self, request: &SimpleTransactionRequest) -> Result<Bytes> {
        let result = self
            .rpc_call("eth_call", serde_json::json!([request.to_json(), "latest"]))
            .await?;

        let hex_data = result.as_str().ok_or_else(|| EnsError::RpcError {
            code: 0,
            message: format!("eth_call returned non-string result {result}"),
        })?;
        let bytes = decode_hex(hex_data)?;
        debug!(len = bytes.len(), "eth_call returned");
        Ok(Bytes::from(bytes))
    }

    #[instrument(skip(self, request), fields(to = %request.to, from = %from))]
    async fn send_transaction(
        &self,
        request: &SimpleTransactionRequest,
        from: Address,
    ) -> Result<B256> {
        let mut tx = request.to_json();
        tx["from"] = serde_json::Value::String(format!("{from:#x}"));

        let result = self
            .rpc_call("eth_sendTransaction", serde_json::json!([tx]))
            .await?;

        let hash = result.as_str().ok_or_else(|| EnsError::RpcError {
            code: 0,
            message: "eth_sendTransaction did not return a hash".into(),
        })?;

        let bytes = decode_hex(hash)?;
        if bytes.len() != 32 {
            return Err(EnsError::RpcError {
                code: 0,
                message: format!("transaction hash has {} bytes", bytes.len()),
            });
        }
        Ok(B256::from_slice(&bytes))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> EnsError {
    if e.is_timeout() {
        EnsError::ConnectionTimeout(e.to_string())
    } else {
        EnsError::HttpError(e.to_string())
    }
}

/// Reverts carry their payload in `error.data` (sometimes nested one level).
fn parse_rpc_error(method: &str, error: &serde_json::Value) -> EnsError {
    let code = error.get("code").and_then(|c| c.as_i64()).unwrap_or(0);
    let message = error
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("Unknown RPC error")
        .to_string();

    let data = error.get("data").and_then(|d| {
        d.as_str()
            .or_else(|| d.get("data").and_then(|inner| inner.as_str()))
    });

    if let Some(data) = data {
        if let Ok(bytes) = decode_hex(data) {
            if !bytes.is_empty() {
                debug!(method, code, "Call reverted");
                return EnsError::ContractReverted { data: bytes };
            }
        }
    }

    warn!(method, code, error = %message, "RPC error");
    EnsError::RpcError { code, message }
}

fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(s)?)
}

fn parse_quantity(value: &serde_json::Value) -> Result<u64> {
    let s = value.as_str().ok_or_else(|| EnsError::RpcError {
        code: 0,
        message: format!("expected hex quantity, got {value}"),
    })?;
    let digits = s.strip_prefix("0x").unwrap_or(s);
    u64::from_str_radix(digits, 16).map_err(|e| EnsError::RpcError {
        code: 0,
        message: format!("invalid quantity '{s}': {e}"),
    })
}
