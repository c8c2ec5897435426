//! Single-owner capability
use odra::prelude::*;
use crate::errors::DistributorError;
use crate::events::OwnershipTransferred;
use super::is_zero_address;

/// Stores the one administrative identity of a contract
#[odra::module]
pub struct Ownable {
    /// Current owner
    owner: Var<Address>,
}

#[odra::module]
impl Ownable {
    /// Set the initial owner
    pub fn init(&mut self, owner: Address) {
        if is_zero_address(&owner) {
            self.env().revert(DistributorError::InvalidAddress);
        }
        self.owner.set(owner);

        self.env().emit_event(OwnershipTransferred {
            previous_owner: None,
            new_owner: owner,
        });
    }

    /// Get the owner address
    pub fn get_owner(&self) -> Address {
        self.owner.get_or_revert_with(DistributorError::Unauthorized)
    }

    /// Check whether an account is the owner
    pub fn is_owner(&self, account: Address) -> bool {
        self.owner.get() == Some(account)
    }

    /// Revert with `Unauthorized` unless the caller is the owner
    pub fn assert_owner(&self) {
        let caller = self.env().caller();
        if !self.is_owner(caller) {
            self.env().revert(DistributorError::Unauthorized);
        }
    }

    /// Hand ownership to another account (owner only)
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.assert_owner();
        if is_zero_address(&new_owner) {
            self.env().revert(DistributorError::InvalidOwner);
        }

        let previous_owner = self.get_owner();
        self.owner.set(new_owner);

        self.env().emit_event(OwnershipTransferred {
            previous_owner: Some(previous_owner),
            new_owner,
        });
    }
}
