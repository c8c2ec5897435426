#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// Dividend distribution
pub mod distributor;
pub mod registry;
pub mod token;
pub mod access;
pub mod errors;
pub mod events;
pub mod math;
