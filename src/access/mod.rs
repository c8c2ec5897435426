//! Access control building blocks shared by the distributor and the registry
//!
//! - `Ownable`: single owner identity with transfer
//! - `Pausable`: binary operational gate
//! - `ReentrancyGuard`: in-progress flag held for a whole mutating call

pub mod ownable;
pub mod pausable;
pub mod reentrancy;

pub use ownable::Ownable;
pub use pausable::Pausable;
pub use reentrancy::ReentrancyGuard;

use odra::casper_types::bytesrepr::ToBytes;
use odra::prelude::Address;

/// True when the address hash is all zeros (the null identity)
pub fn is_zero_address(address: &Address) -> bool {
    match address.to_bytes() {
        // First byte is the account/contract tag
        Ok(bytes) => bytes.iter().skip(1).all(|b| *b == 0),
        Err(_) => false,
    }
}
