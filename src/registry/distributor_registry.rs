//! Distributor Registry
//!
//! Indexes distributors by the asset they serve and by their share token.
//! Distributors are deployed separately and then registered here by the
//! owner; registration checks that the distributor really reads its
//! weights from the given share token.
use odra::prelude::*;
use odra::ContractRef;
use crate::access::{is_zero_address, Ownable};
use crate::distributor::dividend_distributor::DividendDistributorContractRef;
use crate::errors::DistributorError;
use crate::events::DistributorRegistered;

/// Registry contract for distributors
#[odra::module]
pub struct DistributorRegistry {
    /// Owner capability
    ownable: SubModule<Ownable>,
    /// asset -> distributor
    by_asset: Mapping<Address, Address>,
    /// share token -> distributor
    by_share_token: Mapping<Address, Address>,
    /// Registered distributors
    registered: Mapping<Address, bool>,
    /// List of all distributors (stored as index -> address)
    all_distributors: Mapping<u32, Address>,
    /// Total number of distributors
    distributor_count: Var<u32>,
}

#[odra::module]
impl DistributorRegistry {
    /// Initialize the registry with its owner
    pub fn init(&mut self, owner: Address) {
        self.ownable.init(owner);
        self.distributor_count.set(0);
    }

    /// Record a deployed distributor for an asset (owner only)
    /// Returns the new distributor count
    pub fn register_distributor(
        &mut self,
        asset: Address,
        share_token: Address,
        distributor: Address,
    ) -> u32 {
        self.ownable.assert_owner();

        if is_zero_address(&asset) || is_zero_address(&share_token) || is_zero_address(&distributor) {
            self.env().revert(DistributorError::InvalidAddress);
        }
        if self.by_asset.get(&asset).is_some()
            || self.by_share_token.get(&share_token).is_some()
            || self.is_distributor(distributor)
        {
            self.env().revert(DistributorError::DistributorExists);
        }

        let contract = DividendDistributorContractRef::new(self.env(), distributor);
        if contract.balance_oracle() != share_token {
            self.env().revert(DistributorError::DistributorMismatch);
        }

        self.by_asset.set(&asset, distributor);
        self.by_share_token.set(&share_token, distributor);
        self.registered.set(&distributor, true);

        let index = self.distributor_count();
        self.all_distributors.set(&index, distributor);
        self.distributor_count.set(index + 1);

        self.env().emit_event(DistributorRegistered {
            asset,
            share_token,
            distributor,
            distributor_count: index + 1,
        });

        index + 1
    }

    /// Get total number of distributors
    pub fn distributor_count(&self) -> u32 {
        self.distributor_count.get_or_default()
    }

    /// Get distributor by index
    pub fn distributor_at(&self, index: u32) -> Address {
        self.all_distributors
            .get(&index)
            .unwrap_or_else(|| self.env().revert(DistributorError::IndexOutOfBounds))
    }

    /// Every registered distributor in registration order
    pub fn all_distributors(&self) -> Vec<Address> {
        (0..self.distributor_count())
            .filter_map(|index| self.all_distributors.get(&index))
            .collect()
    }

    pub fn distributor_by_asset(&self, asset: Address) -> Option<Address> {
        self.by_asset.get(&asset)
    }

    pub fn distributor_by_share_token(&self, share_token: Address) -> Option<Address> {
        self.by_share_token.get(&share_token)
    }

    pub fn is_distributor(&self, distributor: Address) -> bool {
        self.registered.get(&distributor).unwrap_or(false)
    }

    pub fn owner(&self) -> Address {
        self.ownable.get_owner()
    }

    /// Hand the registry to another owner (owner only)
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.ownable.transfer_ownership(new_owner);
    }
}
