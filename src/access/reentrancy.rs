//! Reentrancy guard
//!
//! Held from the start of a mutating entry point until its last statement.
//! A revert discards every write of the call, the lock included, so failed
//! calls never leave the guard engaged.
use odra::prelude::*;
use crate::errors::DistributorError;

/// In-progress flag for externally-callable mutating functions
#[odra::module]
pub struct ReentrancyGuard {
    /// Reentrancy lock
    locked: Var<bool>,
}

#[odra::module]
impl ReentrancyGuard {
    /// Whether a guarded call is in progress
    pub fn is_locked(&self) -> bool {
        self.locked.get_or_default()
    }

    /// Take the lock or revert with `ReentrancyDetected`
    pub fn enter(&mut self) {
        if self.is_locked() {
            self.env().revert(DistributorError::ReentrancyDetected);
        }
        self.locked.set(true);
    }

    /// Release the lock
    pub fn exit(&mut self) {
        self.locked.set(false);
    }
}
