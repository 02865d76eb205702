//! NftContractFactory - deploys the member contracts of launchpad sets
//!
//! Wraps the three child factories generated for `NftCollection`,
//! `LaunchpadSale` and `PayoutVault`. Every child gets a unique contract
//! name of the form `wenft_<kind>_<index>`.

use odra::prelude::*;
use odra::ContractRef;
use crate::errors::NftError;
use crate::events::ContractDeployed;
use super::collection::NftCollectionFactoryContractRef;
use super::sale::LaunchpadSaleFactoryContractRef;
use super::vault::PayoutVaultFactoryContractRef;

pub const KIND_COLLECTION: &str = "collection";
pub const KIND_SALE: &str = "sale";
pub const KIND_VAULT: &str = "vault";

/// NftContractFactory contract
#[odra::module(events = [ContractDeployed])]
pub struct NftContractFactory {
    /// Child factory deploying NftCollection instances
    collection_factory: Var<Address>,
    /// Child factory deploying LaunchpadSale instances
    sale_factory: Var<Address>,
    /// Child factory deploying PayoutVault instances
    vault_factory: Var<Address>,
    /// Number of contracts deployed so far, across all kinds
    deployed_count: Var<u64>,
}

#[odra::module]
impl NftContractFactory {
    /// Initialize with the addresses of the child factories
    pub fn init(&mut self, collection_factory: Address, sale_factory: Address, vault_factory: Address) {
        self.collection_factory.set(collection_factory);
        self.sale_factory.set(sale_factory);
        self.vault_factory.set(vault_factory);
        self.deployed_count.set(0);
    }

    // ============ View Functions ============

    pub fn deployed_count(&self) -> u64 {
        self.deployed_count.get_or_default()
    }

    pub fn collection_factory(&self) -> Address {
        self.collection_factory.get_or_revert_with(NftError::ChildFactoryMissing)
    }

    pub fn sale_factory(&self) -> Address {
        self.sale_factory.get_or_revert_with(NftError::ChildFactoryMissing)
    }

    pub fn vault_factory(&self) -> Address {
        self.vault_factory.get_or_revert_with(NftError::ChildFactoryMissing)
    }

    // ============ Write Functions ============

    /// Deploy a new NftCollection
    pub fn create_collection(
        &mut self,
        owner: Address,
        name: String,
        symbol: String,
        base_uri: String,
        secondary_uri: Option<String>,
    ) -> Address {
        let (contract_name, index) = self.next_contract_name(KIND_COLLECTION);
        let mut factory = NftCollectionFactoryContractRef::new(self.env(), self.collection_factory());
        let (address, _) = factory.new_contract(contract_name, owner, name, symbol, base_uri, secondary_uri);
        self.record_deployment(KIND_COLLECTION, address, index);
        address
    }

    /// Deploy a new LaunchpadSale
    pub fn create_sale(
        &mut self,
        owner: Address,
        collection: Address,
        vault: Address,
        mint_enabled: bool,
    ) -> Address {
        let (contract_name, index) = self.next_contract_name(KIND_SALE);
        let mut factory = LaunchpadSaleFactoryContractRef::new(self.env(), self.sale_factory());
        let (address, _) = factory.new_contract(contract_name, owner, collection, vault, mint_enabled);
        self.record_deployment(KIND_SALE, address, index);
        address
    }

    /// Deploy a new PayoutVault
    pub fn create_payout_vault(
        &mut self,
        owner: Address,
        beneficiary: Address,
        auxiliary: Option<Address>,
    ) -> Address {
        let (contract_name, index) = self.next_contract_name(KIND_VAULT);
        let mut factory = PayoutVaultFactoryContractRef::new(self.env(), self.vault_factory());
        let (address, _) = factory.new_contract(contract_name, owner, beneficiary, auxiliary);
        self.record_deployment(KIND_VAULT, address, index);
        address
    }

    // ============ Internal Functions ============

    fn next_contract_name(&mut self, kind: &str) -> (String, u64) {
        let index = self.deployed_count.get_or_default();
        self.deployed_count.set(index + 1);
        (alloc::format!("wenft_{}_{}", kind, index), index)
    }

    fn record_deployment(&self, kind: &str, contract: Address, index: u64) {
        self.env().emit_event(ContractDeployed {
            kind: String::from(kind),
            contract,
            index,
        });
    }
}
