//! # enskit Contracts
//!
//! ABI fragments for the ENS contracts, declared with alloy's `sol!`, and the
//! addresses those contracts are deployed at. Only the functions enskit
//! actually calls are declared.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

mod addresses;
mod eth_registrar_controller;
mod name_wrapper;
mod public_resolver;
mod registry;
mod universal_resolver;

pub use addresses::{get_chain_contract_address, ChainContracts, ContractName};
pub use eth_registrar_controller::EthRegistrarController;
pub use name_wrapper::NameWrapper;
pub use public_resolver::PublicResolver;
pub use registry::EnsRegistry;
pub use universal_resolver::{
    decode_universal_resolver_error, UniversalResolver, UniversalResolverError,
};
