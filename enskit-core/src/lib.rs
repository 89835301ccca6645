//! # enskit Core
//!
//! Core types, errors, and traits shared by the enskit crates.
//!
//! - **Types**: transaction requests, name types, fuses, ABI records
//! - **Errors**: one `thiserror` hierarchy for every crate
//! - **Names**: namehash, labelhash, DNS wire encoding, name classification
//! - **Traits**: the transport seam used by the read and write clients
//!
//! ## Example
//!
//! ```rust
//! use enskit_core::{get_name_type, namehash, NameType};
//!
//! assert_eq!(get_name_type("sub.alice.eth"), NameType::EthSubname);
//! let node = namehash("alice.eth");
//! assert_ne!(node, alloy::primitives::B256::ZERO);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod names;
pub mod normalise;
pub mod traits;
pub mod types;
pub mod wrapper;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{EnsError, Result};
pub use names::{get_name_type, make_label_node_and_parent, LabelNodeAndParent};
pub use normalise::{labelhash, namehash, normalize, packet_to_bytes};
pub use traits::RpcTransport;
pub use types::*;
pub use wrapper::{expiry_to_u64, wrapped_label_length_check, Expiry};
