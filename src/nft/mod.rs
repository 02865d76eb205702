//! NFT contracts deployed as members of a launchpad set
//!
//! This module provides:
//! - NftContractFactory: deploys member contracts through child factories
//! - NftCollection: collection metadata (name, symbol, content URIs)
//! - LaunchpadSale: sale configuration linking collection and vault
//! - PayoutVault: beneficiary and optional payout override

pub mod collection;
pub mod contract_factory;
pub mod sale;
pub mod vault;

pub use collection::*;
pub use contract_factory::*;
pub use sale::*;
pub use vault::*;
