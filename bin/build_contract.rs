//! Binary for building WASM contracts from odra modules.
#![doc = "Binary for building WASM contracts from odra modules."]
#![no_std]
#![no_main]
#![allow(unused_imports, clippy::single_component_path_imports)]
use wenft_launchpad;
