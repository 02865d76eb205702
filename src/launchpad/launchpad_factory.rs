//! WenftLaunchpadFactory - creates and registers launchpad sets
//!
//! A launchpad set is three contracts deployed together through the linked
//! NftContractFactory:
//! 1. An NftCollection
//! 2. A LaunchpadSale selling that collection
//! 3. A PayoutVault receiving the proceeds
//!
//! Sets are stored under a 32-byte key derived at creation time and are
//! never modified afterwards.

use odra::prelude::*;
use odra::casper_types::bytesrepr::ToBytes;
use odra::ContractRef;
use crate::events::{FactoryContractSet, LaunchpadSetCreated};
use crate::nft::NftContractFactoryContractRef;
use super::config::LaunchpadSetConfig;
use super::errors::LaunchpadError;

/// Identifier of a launchpad set
pub type LaunchpadKey = [u8; 32];

/// The key that is never issued
pub const NULL_KEY: LaunchpadKey = [0u8; 32];

/// WenftLaunchpadFactory contract
#[odra::module(events = [LaunchpadSetCreated, FactoryContractSet])]
pub struct WenftLaunchpadFactory {
    /// Admin address (can relink the contract factory)
    admin: Var<Address>,
    /// Linked NftContractFactory
    factory_contract: Var<Address>,
    /// Total number of sets created
    set_count: Var<u64>,
    /// Mapping: index -> key
    set_keys: Mapping<u64, LaunchpadKey>,
    /// Mapping: key -> collection address
    set_collections: Mapping<LaunchpadKey, Address>,
    /// Mapping: key -> sale address
    set_sales: Mapping<LaunchpadKey, Address>,
    /// Mapping: key -> vault address
    set_vaults: Mapping<LaunchpadKey, Address>,
    /// Mapping: key -> creator address
    set_creators: Mapping<LaunchpadKey, Address>,
    /// Mapping: key -> created_at
    set_created_at: Mapping<LaunchpadKey, u64>,
}

#[odra::module]
impl WenftLaunchpadFactory {
    /// Initialize the factory, optionally linking the contract factory right away
    pub fn init(&mut self, factory_contract: Option<Address>) {
        let caller = self.env().caller();
        self.admin.set(caller);
        self.set_count.set(0);
        if let Some(factory_contract) = factory_contract {
            self.link_factory_contract(factory_contract);
        }
    }

    // ============ View Functions ============

    /// Get admin address
    pub fn admin(&self) -> Address {
        self.admin.get_or_revert_with(LaunchpadError::Unauthorized)
    }

    /// Get the linked NftContractFactory, if any
    pub fn factory_contract(&self) -> Option<Address> {
        self.factory_contract.get()
    }

    /// Get total number of sets created
    pub fn launchpad_set_count(&self) -> u64 {
        self.set_count.get_or_default()
    }

    /// Get the key of the set created at `index`
    pub fn launchpad_key_at(&self, index: u64) -> Option<LaunchpadKey> {
        self.set_keys.get(&index)
    }

    /// Get the members of a set as (collection, sale, vault).
    /// Reverts with `NotFound` for an unknown key.
    pub fn get_launchpad_set(&self, key: LaunchpadKey) -> (Address, Address, Address) {
        match self.find_launchpad_set(key) {
            Some(set) => set,
            None => self.env().revert(LaunchpadError::NotFound),
        }
    }

    /// Same as `get_launchpad_set`, but returns `None` for an unknown key
    pub fn find_launchpad_set(&self, key: LaunchpadKey) -> Option<(Address, Address, Address)> {
        let collection = self.set_collections.get(&key)?;
        let sale = self.set_sales.get(&key)?;
        let vault = self.set_vaults.get(&key)?;
        Some((collection, sale, vault))
    }

    /// Get the creator of a set
    pub fn launchpad_set_creator(&self, key: LaunchpadKey) -> Option<Address> {
        self.set_creators.get(&key)
    }

    /// Get the block time at which a set was created
    pub fn launchpad_set_created_at(&self, key: LaunchpadKey) -> Option<u64> {
        self.set_created_at.get(&key)
    }

    // ============ Write Functions ============

    /// Create a new launchpad set and return its key
    ///
    /// The key is also the first field of the emitted `LaunchpadSetCreated`
    /// event. Any failure reverts the whole call, so no partial set is
    /// ever stored.
    pub fn generate_launchpad_set(&mut self, config: LaunchpadSetConfig) -> LaunchpadKey {
        let factory_contract = self
            .factory_contract
            .get_or_revert_with(LaunchpadError::DependencyNotConfigured);
        if let Err(error) = config.validate() {
            self.env().revert(error);
        }

        let creator = self.env().caller();
        let index = self.set_count.get_or_default();
        let key = self.derive_key(creator, index);
        if key == NULL_KEY || self.set_collections.get(&key).is_some() {
            self.env().revert(LaunchpadError::DuplicateKey);
        }

        let LaunchpadSetConfig {
            name,
            symbol,
            base_uri,
            secondary_uri,
            mint_enabled,
            beneficiary,
            auxiliary,
        } = config;

        let mut contracts = NftContractFactoryContractRef::new(self.env(), factory_contract);
        let vault = contracts.create_payout_vault(creator, beneficiary, auxiliary);
        let collection = contracts.create_collection(creator, name, symbol, base_uri, secondary_uri);
        let sale = contracts.create_sale(creator, collection, vault, mint_enabled);
        let created_at = self.env().get_block_time();

        self.set_keys.set(&index, key);
        self.set_collections.set(&key, collection);
        self.set_sales.set(&key, sale);
        self.set_vaults.set(&key, vault);
        self.set_creators.set(&key, creator);
        self.set_created_at.set(&key, created_at);
        self.set_count.set(index + 1);

        self.env().emit_event(LaunchpadSetCreated {
            key,
            collection,
            sale,
            vault,
            creator,
        });

        key
    }

    // ============ Admin Functions ============

    /// Link (or relink) the NftContractFactory used to deploy set members
    pub fn set_factory_contract(&mut self, factory_contract: Address) {
        self.assert_admin();
        self.link_factory_contract(factory_contract);
    }

    /// Transfer admin role
    pub fn transfer_admin(&mut self, new_admin: Address) {
        self.assert_admin();
        self.admin.set(new_admin);
    }

    // ============ Internal Functions ============

    fn assert_admin(&self) {
        let caller = self.env().caller();
        let admin = self.admin.get_or_revert_with(LaunchpadError::Unauthorized);
        if caller != admin {
            self.env().revert(LaunchpadError::Unauthorized);
        }
    }

    fn link_factory_contract(&mut self, factory_contract: Address) {
        self.factory_contract.set(factory_contract);
        self.env().emit_event(FactoryContractSet { factory_contract });
    }

    /// hash(self address, creator, index); unique because `index` never repeats
    fn derive_key(&self, creator: Address, index: u64) -> LaunchpadKey {
        let preimage = (self.env().self_address(), creator, index).to_bytes();
        match preimage {
            Ok(preimage) => self.env().hash(preimage),
            Err(_) => self.env().revert(LaunchpadError::KeyDerivationFailed),
        }
    }
}
