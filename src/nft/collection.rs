//! NftCollection - metadata holder for a launchpad collection
//!
//! Stores the collection name, symbol and content URI templates. Token
//! mechanics live outside this contract.

use odra::prelude::*;
use crate::errors::NftError;
use crate::events::OwnershipTransferred;

/// NftCollection contract, deployable through `NftCollectionFactory`
#[odra::module(factory = on, events = [OwnershipTransferred])]
pub struct NftCollection {
    /// Collection owner (the launchpad set creator)
    owner: Var<Address>,
    /// Collection name
    name: Var<String>,
    /// Collection symbol
    symbol: Var<String>,
    /// Primary content URI template
    base_uri: Var<String>,
    /// Optional second content URI template
    secondary_uri: Var<String>,
}

#[odra::module]
impl NftCollection {
    /// Initialize the collection
    pub fn init(
        &mut self,
        owner: Address,
        name: String,
        symbol: String,
        base_uri: String,
        secondary_uri: Option<String>,
    ) {
        self.owner.set(owner);
        self.name.set(name);
        self.symbol.set(symbol);
        self.base_uri.set(base_uri);
        if let Some(uri) = secondary_uri {
            self.secondary_uri.set(uri);
        }
    }

    // ============ View Functions ============

    pub fn owner(&self) -> Address {
        self.owner.get_or_revert_with(NftError::NotInitialized)
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn base_uri(&self) -> String {
        self.base_uri.get_or_default()
    }

    pub fn secondary_uri(&self) -> Option<String> {
        self.secondary_uri.get()
    }

    // ============ Owner Functions ============

    /// Hand the collection over to a new owner
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        let caller = self.env().caller();
        let owner = self.owner.get_or_revert_with(NftError::NotInitialized);
        if caller != owner {
            self.env().revert(NftError::Unauthorized);
        }
        self.owner.set(new_owner);
        self.env().emit_event(OwnershipTransferred {
            previous_owner: owner,
            new_owner,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::{Deployer, HostEnv};

    fn setup(secondary_uri: Option<String>) -> (HostEnv, NftCollectionHostRef) {
        let env = odra_test::env();
        let owner = env.get_account(1);

        let init_args = NftCollectionInitArgs {
            owner,
            name: String::from("TESTNFT"),
            symbol: String::from("TNFT"),
            base_uri: String::from("https://nftcontents.wenft.space/ASDF2/"),
            secondary_uri,
        };
        let collection = NftCollection::deploy(&env, init_args);
        (env, collection)
    }

    #[test]
    fn test_init() {
        let (env, collection) = setup(None);

        assert_eq!(collection.owner(), env.get_account(1));
        assert_eq!(collection.name(), "TESTNFT");
        assert_eq!(collection.symbol(), "TNFT");
        assert_eq!(collection.base_uri(), "https://nftcontents.wenft.space/ASDF2/");
        assert_eq!(collection.secondary_uri(), None);
    }

    #[test]
    fn test_init_with_secondary_uri() {
        let (_env, collection) = setup(Some(String::from("https://nftcontents.wenft.space/hidden/")));

        assert_eq!(
            collection.secondary_uri(),
            Some(String::from("https://nftcontents.wenft.space/hidden/"))
        );
    }

    #[test]
    fn test_transfer_ownership() {
        let (env, mut collection) = setup(None);
        let owner = env.get_account(1);
        let new_owner = env.get_account(2);

        env.set_caller(owner);
        collection.transfer_ownership(new_owner);

        assert_eq!(collection.owner(), new_owner);
        assert!(env.emitted(&collection, "OwnershipTransferred"));
    }

    #[test]
    fn test_non_owner_cannot_transfer_ownership() {
        let (env, mut collection) = setup(None);
        let stranger = env.get_account(3);

        env.set_caller(stranger);
        assert_eq!(
            collection.try_transfer_ownership(stranger),
            Err(NftError::Unauthorized.into())
        );
        assert_eq!(collection.owner(), env.get_account(1));
    }
}
