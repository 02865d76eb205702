//! Events emitted by the launchpad contracts
use odra::prelude::*;

use crate::launchpad::LaunchpadKey;

/// Emitted when a new launchpad set is registered.
/// The key is always the first field.
#[odra::event]
pub struct LaunchpadSetCreated {
    pub key: LaunchpadKey,
    pub collection: Address,
    pub sale: Address,
    pub vault: Address,
    pub creator: Address,
}

/// Emitted when the launchpad factory is pointed at an NFT contract factory
#[odra::event]
pub struct FactoryContractSet {
    pub factory_contract: Address,
}

/// Emitted by the NFT contract factory for every child contract it deploys
#[odra::event]
pub struct ContractDeployed {
    pub kind: String,
    pub contract: Address,
    pub index: u64,
}

/// Emitted when a launchpad sale opens or closes minting
#[odra::event]
pub struct MintStatusChanged {
    pub sale: Address,
    pub mint_enabled: bool,
}

/// Emitted when a collection changes owner
#[odra::event]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}
