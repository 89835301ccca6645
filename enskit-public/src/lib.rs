//! # enskit Public
//!
//! Read-only ENS queries. Each query is an [`EnsReadFunction`]: a pure
//! `encode` producing an `eth_call` request and a pure `decode` parsing the
//! returned bytes. [`EnsPublicClient`] runs them over any
//! [`enskit_core::RpcTransport`].
//!
//! Resolver lookups go through the UniversalResolver, so wildcard and
//! offchain names are handled by the contract. Its "no resolver" style
//! reverts read as `None`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use enskit_public::EnsPublicClient;
//! use enskit_rpc::RpcClient;
//!
//! # async fn example() -> enskit_core::Result<()> {
//! let client = EnsPublicClient::connect(RpcClient::new("https://ethereum.publicnode.com")?).await?;
//! if let Some(abi) = client.get_abi_record("alice.eth").await? {
//!     println!("content type {}", abi.content_type);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod function;
mod get_abi;
mod get_commitment;
mod get_fuses;
mod get_name;
mod get_owner;
mod get_resolver;
mod universal;

pub use client::EnsPublicClient;
pub use function::EnsReadFunction;
pub use get_abi::{decode_abi_payload, decode_abi_result, GetAbiRecord, GetAbiRecordParams};
pub use get_commitment::{GetCommitmentParams, GetCommitmentTimestamp};
pub use get_fuses::{FusesResult, GetFuses, GetFusesParams};
pub use get_name::{reverse_name, GetName, GetNameParams, NameResult};
pub use get_owner::{GetOwner, GetOwnerParams};
pub use get_resolver::{GetResolver, GetResolverParams};
pub use universal::{decode_universal_resolve, encode_universal_resolve, universal_revert_to_none};
