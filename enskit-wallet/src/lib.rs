//! # enskit Wallet
//!
//! State-changing ENS operations. Each one is an [`EnsWriteFunction`] whose
//! `make_function_data` validates the request and builds the transaction
//! without touching the network; [`EnsWalletClient`] sends it.
//!
//! - [`DeleteSubname`], [`CreateSubname`]: subname management on the
//!   Registry or NameWrapper
//! - [`CommitName`]: first step of a `.eth` registration
//! - [`SetAbiRecord`]: ABI records on a resolver
//! - Encoders for ABI payloads and resolver record calldata
//!
//! ## Example
//!
//! ```rust
//! use enskit_contracts::ChainContracts;
//! use enskit_core::ContractType;
//! use enskit_wallet::{DeleteSubname, DeleteSubnameParams, EnsWriteFunction};
//!
//! let contracts = ChainContracts::for_chain(1).unwrap();
//! let tx = DeleteSubname::make_function_data(
//!     &contracts,
//!     &DeleteSubnameParams {
//!         name: "sub.alice.eth".into(),
//!         contract: ContractType::NameWrapper,
//!         as_owner: false,
//!     },
//! )
//! .unwrap();
//! println!("{}", tx.to_json());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod commit_name;
mod create_subname;
mod delete_subname;
mod encoders;
mod function;
mod records;
mod register;
mod set_abi_record;

pub use client::EnsWalletClient;
pub use commit_name::CommitName;
pub use create_subname::{CreateSubname, CreateSubnameParams};
pub use delete_subname::{DeleteSubname, DeleteSubnameParams};
pub use encoders::{
    encode_abi, encode_clear_records, encode_set_abi, encode_set_addr, encode_set_text,
    EncodeAbiInput,
};
pub use function::EnsWriteFunction;
pub use records::{generate_record_call_array, CoinRecord, RecordOptions, TextRecord};
pub use register::{
    make_commitment, make_commitment_tuple, random_secret, CommitmentTuple,
    RegistrationParameters,
};
pub use set_abi_record::{SetAbiRecord, SetAbiRecordParams};
