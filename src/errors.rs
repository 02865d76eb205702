//! Error definitions for the NFT contract factory and the set member contracts
use odra::prelude::*;

/// Errors raised by the NFT contract factory and the contracts it deploys
#[odra::odra_error]
pub enum NftError {
    /// Caller is not the owner of the contract
    Unauthorized = 41_000,

    /// Contract storage was read before `init` ran
    NotInitialized = 41_001,

    /// A child factory address was never configured
    ChildFactoryMissing = 41_002,
}
