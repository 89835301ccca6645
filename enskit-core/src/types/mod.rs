//! Domain types for enskit.

mod abi;
mod fuses;
mod name;
mod transaction;

pub use abi::{AbiEncodeAs, AbiPayload, DecodedAbi, EncodedAbi};
pub use fuses::{Fuses, Vulnerability};
pub use name::{ContractType, NameType};
pub use transaction::SimpleTransactionRequest;
