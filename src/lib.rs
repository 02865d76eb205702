//! WeNFT launchpad contracts for Casper
//!
//! - `launchpad`: the launchpad factory that creates and registers launchpad sets
//! - `nft`: the NFT contract factory and the member contracts of a set
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

pub mod errors;
pub mod events;
pub mod launchpad;
pub mod nft;
