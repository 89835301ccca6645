//! Registration commitments for `.eth` second-level names.
//!
//! Registering goes through a commit/reveal scheme: the commitment hashes
//! every registration parameter together with a secret, so the name cannot
//! be front-run between the two transactions.

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use alloy::sol_types::SolValue;
use rand::RngCore;

use enskit_core::constants::{COMMITMENT_SECRET_SIZE, EMPTY_ADDRESS};
use enskit_core::error::{EnsError, Result};
use enskit_core::types::Fuses;
use enskit_core::{labelhash, namehash};

use crate::records::{generate_record_call_array, RecordOptions};

/// Everything a registration commits to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationParameters {
    /// `.eth` second-level name to register
    pub name: String,
    /// Owner of the registered name
    pub owner: Address,
    /// Registration length in seconds
    pub duration: u64,
    /// Commitment secret, see [`random_secret`]
    pub secret: B256,
    /// Resolver to set; required for records and reverse records
    pub resolver_address: Option<Address>,
    /// Records to set on the resolver during registration
    pub records: Option<RecordOptions>,
    /// Also set the owner's primary name
    pub reverse_record: bool,
    /// Owner-controlled fuses to burn
    pub fuses: Option<Fuses>,
}

/// The tuple hashed into a commitment, in contract argument order:
/// `(label, owner, duration, secret, resolver, data, reverseRecord,
/// ownerControlledFuses)`.
pub type CommitmentTuple = (B256, Address, U256, B256, Address, Vec<Bytes>, bool, u16);

/// Builds the commitment tuple, validating the parameters.
pub fn make_commitment_tuple(params: &RegistrationParameters) -> Result<CommitmentTuple> {
    let label = params.name.split('.').next().unwrap_or_default();
    let resolver = params.resolver_address.unwrap_or(EMPTY_ADDRESS);

    if params.reverse_record && resolver == EMPTY_ADDRESS {
        return Err(EnsError::ResolverAddressRequired);
    }

    let fuses = match params.fuses {
        Some(fuses) => fuses.encode_child()?,
        None => 0,
    };

    let data = match &params.records {
        Some(records) => generate_record_call_array(namehash(&params.name), records),
        None => Vec::new(),
    };

    Ok((
        labelhash(label),
        params.owner,
        U256::from(params.duration),
        params.secret,
        resolver,
        data,
        params.reverse_record,
        fuses,
    ))
}

/// keccak256 of the ABI-encoded commitment tuple.
pub fn make_commitment(params: &RegistrationParameters) -> Result<B256> {
    let tuple = make_commitment_tuple(params)?;
    Ok(keccak256(tuple.abi_encode_params()))
}

/// A fresh random commitment secret.
pub fn random_secret() -> B256 {
    let mut bytes = [0u8; COMMITMENT_SECRET_SIZE];
    rand::thread_rng().fill_bytes(&mut bytes);
    B256::from(bytes)
}
