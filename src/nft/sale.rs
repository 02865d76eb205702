//! LaunchpadSale - sale configuration for a launchpad set
//!
//! Links the set's collection to its payout vault and carries the
//! mint switch chosen at creation time.

use odra::prelude::*;
use crate::errors::NftError;
use crate::events::MintStatusChanged;

/// LaunchpadSale contract, deployable through `LaunchpadSaleFactory`
#[odra::module(factory = on, events = [MintStatusChanged])]
pub struct LaunchpadSale {
    /// Sale owner (the launchpad set creator)
    owner: Var<Address>,
    /// Collection sold by this launchpad
    collection: Var<Address>,
    /// Vault receiving the proceeds
    vault: Var<Address>,
    /// Whether minting is open
    mint_enabled: Var<bool>,
}

#[odra::module]
impl LaunchpadSale {
    /// Initialize the sale
    pub fn init(&mut self, owner: Address, collection: Address, vault: Address, mint_enabled: bool) {
        self.owner.set(owner);
        self.collection.set(collection);
        self.vault.set(vault);
        self.mint_enabled.set(mint_enabled);
    }

    // ============ View Functions ============

    pub fn owner(&self) -> Address {
        self.owner.get_or_revert_with(NftError::NotInitialized)
    }

    pub fn collection(&self) -> Address {
        self.collection.get_or_revert_with(NftError::NotInitialized)
    }

    pub fn vault(&self) -> Address {
        self.vault.get_or_revert_with(NftError::NotInitialized)
    }

    pub fn mint_enabled(&self) -> bool {
        self.mint_enabled.get_or_default()
    }

    // ============ Owner Functions ============

    /// Open or close minting
    pub fn set_mint_enabled(&mut self, enabled: bool) {
        let caller = self.env().caller();
        let owner = self.owner.get_or_revert_with(NftError::NotInitialized);
        if caller != owner {
            self.env().revert(NftError::Unauthorized);
        }
        self.mint_enabled.set(enabled);
        self.env().emit_event(MintStatusChanged {
            sale: self.env().self_address(),
            mint_enabled: enabled,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::{Deployer, HostEnv};

    fn setup() -> (HostEnv, LaunchpadSaleHostRef) {
        let env = odra_test::env();

        let init_args = LaunchpadSaleInitArgs {
            owner: env.get_account(1),
            collection: env.get_account(2),
            vault: env.get_account(3),
            mint_enabled: true,
        };
        let sale = LaunchpadSale::deploy(&env, init_args);
        (env, sale)
    }

    #[test]
    fn test_init() {
        let (env, sale) = setup();

        assert_eq!(sale.owner(), env.get_account(1));
        assert_eq!(sale.collection(), env.get_account(2));
        assert_eq!(sale.vault(), env.get_account(3));
        assert!(sale.mint_enabled());
    }

    #[test]
    fn test_owner_toggles_minting() {
        let (env, mut sale) = setup();

        env.set_caller(env.get_account(1));
        sale.set_mint_enabled(false);
        assert!(!sale.mint_enabled());
        assert!(env.emitted(&sale, "MintStatusChanged"));

        sale.set_mint_enabled(true);
        assert!(sale.mint_enabled());
    }

    #[test]
    #[should_panic]
    fn test_non_owner_cannot_toggle_minting() {
        let (env, mut sale) = setup();

        env.set_caller(env.get_account(4));
        sale.set_mint_enabled(false); // Should panic
    }
}
