//! Transport configuration.

use serde::{Deserialize, Serialize};

use enskit_core::constants::DEFAULT_ETH_RPC_URL;
use enskit_core::error::{EnsError, Result};

/// JSON-RPC transport configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Ethereum RPC URL
    pub rpc_url: String,
    /// Chain id; queried with `eth_chainId` when unset
    pub chain_id: Option<u64>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_ETH_RPC_URL.into(),
            chain_id: None,
            timeout_seconds: 30,
        }
    }
}

impl RpcConfig {
    /// Creates a new configuration with the given RPC URL.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            ..Default::default()
        }
    }

    /// Pins the chain id instead of asking the node.
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Reads `ETH_RPC_URL`, `ENS_CHAIN_ID` and `ENS_RPC_TIMEOUT`, loading a
    /// `.env` file first if one exists.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();

        let chain_id = match std::env::var("ENS_CHAIN_ID") {
            Ok(v) => Some(v.trim().parse::<u64>().map_err(|e| {
                EnsError::ConfigError(format!("ENS_CHAIN_ID '{v}' is not a number: {e}"))
            })?),
            Err(_) => None,
        };

        let timeout_seconds = match std::env::var("ENS_RPC_TIMEOUT") {
            Ok(v) => v.trim().parse::<u64>().map_err(|e| {
                EnsError::ConfigError(format!("ENS_RPC_TIMEOUT '{v}' is not a number: {e}"))
            })?,
            Err(_) => defaults.timeout_seconds,
        };

        let config = Self {
            rpc_url: std::env::var("ETH_RPC_URL").unwrap_or(defaults.rpc_url),
            chain_id,
            timeout_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the URL is an http(s) URL and the timeout is non-zero.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.rpc_url)
            .map_err(|e| EnsError::ConfigError(format!("invalid RPC URL '{}': {e}", self.rpc_url)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(EnsError::ConfigError(format!(
                "RPC URL must be http(s), got '{}'",
                url.scheme()
            )));
        }

        if self.timeout_seconds == 0 {
            return Err(EnsError::ConfigError("timeout must be at least 1 second".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = RpcConfig::default();
        assert_eq!(config.rpc_url, DEFAULT_ETH_RPC_URL);
        assert_eq!(config.chain_id, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RpcConfig::new("http://localhost:8545").with_chain_id(1337);
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain_id, Some(1337));
    }

    const ENV_VARS: [&str; 3] = ["ETH_RPC_URL", "ENS_CHAIN_ID", "ENS_RPC_TIMEOUT"];

    // Tests in this module share the process environment.
    static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

    fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock();
        let saved: Vec<_> = ENV_VARS.iter().map(|k| (*k, std::env::var(k).ok())).collect();
        for key in ENV_VARS {
            std::env::remove_var(key);
        }
        for (key, value) in vars {
            std::env::set_var(key, value);
        }

        let result = f();

        for (key, value) in saved {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
        result
    }

    #[test]
    fn test_from_env_defaults() {
        let config = with_env(&[], RpcConfig::from_env).unwrap();
        assert_eq!(config.rpc_url, DEFAULT_ETH_RPC_URL);
        assert_eq!(config.chain_id, None);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_from_env_reads_variables() {
        let config = with_env(
            &[
                ("ETH_RPC_URL", "http://localhost:8545"),
                ("ENS_CHAIN_ID", " 11155111 "),
                ("ENS_RPC_TIMEOUT", "5"),
            ],
            RpcConfig::from_env,
        )
        .unwrap();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain_id, Some(11_155_111));
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_from_env_rejects_bad_values() {
        let cases: [&[(&str, &str)]; 4] = [
            &[("ENS_CHAIN_ID", "mainnet")],
            &[("ENS_RPC_TIMEOUT", "soon")],
            &[("ENS_RPC_TIMEOUT", "0")],
            &[("ETH_RPC_URL", "localhost:8545")],
        ];
        for vars in cases {
            let result = with_env(vars, RpcConfig::from_env);
            assert!(
                matches!(result, Err(EnsError::ConfigError(_))),
                "{vars:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(RpcConfig::new("not a url").validate().is_err());
        assert!(RpcConfig::new("ws://localhost:8546").validate().is_err());

        let mut config = RpcConfig::new("https://example.com");
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
