//! Launchpad-specific error types

use odra::prelude::*;

/// Errors that can occur in the launchpad factory
#[odra::odra_error]
pub enum LaunchpadError {
    /// The NFT contract factory has never been linked
    DependencyNotConfigured = 40_000,

    /// Name, symbol or content URI is empty
    InvalidArgument = 40_001,

    /// Derived key is null or already registered
    DuplicateKey = 40_002,

    /// No launchpad set is registered under the key
    NotFound = 40_003,

    /// Caller is not authorized for this operation
    Unauthorized = 40_004,

    /// Key preimage could not be serialized
    KeyDerivationFailed = 40_005,
}
