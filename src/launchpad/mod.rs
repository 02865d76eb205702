//! Launchpad module for WeNFT launchpad sets
//!
//! This module provides:
//! - WenftLaunchpadFactory: creates launchpad sets and looks them up by key
//! - LaunchpadSetConfig: named-field arguments of a new set

pub mod config;
pub mod errors;
pub mod launchpad_factory;


pub use config::*;
pub use errors::*;
pub use launchpad_factory::*;
