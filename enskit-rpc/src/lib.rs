//! # enskit RPC
//!
//! Transports implementing [`enskit_core::RpcTransport`]:
//!
//! - [`RpcClient`]: Ethereum JSON-RPC over HTTP (`eth_call`,
//!   `eth_sendTransaction`, `eth_chainId`)
//! - [`MockTransport`]: canned responses for tests and dry runs

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod config;
mod mock;

pub use client::RpcClient;
pub use config::RpcConfig;
pub use mock::{MockTransport, SentTransaction};
