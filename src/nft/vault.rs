//! PayoutVault - payout routing for a launchpad set
//!
//! Holds the beneficiary of a set and an optional auxiliary address that
//! overrides it. No auxiliary means no override.

use odra::prelude::*;
use crate::errors::NftError;

/// PayoutVault contract, deployable through `PayoutVaultFactory`
#[odra::module(factory = on)]
pub struct PayoutVault {
    /// Vault owner (the launchpad set creator)
    owner: Var<Address>,
    /// Default receiver of proceeds
    beneficiary: Var<Address>,
    /// Receiver overriding the beneficiary, if set
    auxiliary: Var<Address>,
}

#[odra::module]
impl PayoutVault {
    /// Initialize the vault
    pub fn init(&mut self, owner: Address, beneficiary: Address, auxiliary: Option<Address>) {
        self.owner.set(owner);
        self.beneficiary.set(beneficiary);
        if let Some(auxiliary) = auxiliary {
            self.auxiliary.set(auxiliary);
        }
    }

    pub fn owner(&self) -> Address {
        self.owner.get_or_revert_with(NftError::NotInitialized)
    }

    pub fn beneficiary(&self) -> Address {
        self.beneficiary.get_or_revert_with(NftError::NotInitialized)
    }

    pub fn auxiliary(&self) -> Option<Address> {
        self.auxiliary.get()
    }

    /// Address that receives proceeds: the auxiliary if present, else the beneficiary
    pub fn payout_address(&self) -> Address {
        match self.auxiliary.get() {
            Some(auxiliary) => auxiliary,
            None => self.beneficiary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::Deployer;

    #[test]
    fn test_payout_goes_to_beneficiary_without_override() {
        let env = odra_test::env();
        let beneficiary = env.get_account(2);

        let vault = PayoutVault::deploy(&env, PayoutVaultInitArgs {
            owner: env.get_account(1),
            beneficiary,
            auxiliary: None,
        });

        assert_eq!(vault.beneficiary(), beneficiary);
        assert_eq!(vault.auxiliary(), None);
        assert_eq!(vault.payout_address(), beneficiary);
    }

    #[test]
    fn test_auxiliary_overrides_beneficiary() {
        let env = odra_test::env();
        let beneficiary = env.get_account(2);
        let auxiliary = env.get_account(3);

        let vault = PayoutVault::deploy(&env, PayoutVaultInitArgs {
            owner: env.get_account(1),
            beneficiary,
            auxiliary: Some(auxiliary),
        });

        assert_eq!(vault.owner(), env.get_account(1));
        assert_eq!(vault.beneficiary(), beneficiary);
        assert_eq!(vault.payout_address(), auxiliary);
    }
}
