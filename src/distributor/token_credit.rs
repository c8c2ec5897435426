//! Alternate-token credits
//!
//! Push-based side ledger: the owner credits CEP-18 rewards to accounts and
//! accounts later withdraw them. No per-share accounting is involved.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::access::is_zero_address;
use crate::errors::DistributorError;
use crate::events::{PayoutTokenUpdated, TokenRewardCredited};

/// Pending alternate-token rewards and payout-token eligibility
#[odra::module]
pub struct TokenCredits {
    /// Eligible payout tokens
    payout_token_enabled: Mapping<Address, bool>,
    /// (account, token) -> pending amount
    pending_token_rewards: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl TokenCredits {
    /// Whether a token is flagged as a payout token
    pub fn is_enabled(&self, token: Address) -> bool {
        self.payout_token_enabled.get(&token).unwrap_or(false)
    }

    /// Pending amount of `token` for `account`
    pub fn pending(&self, account: Address, token: Address) -> U256 {
        self.pending_token_rewards.get(&(account, token)).unwrap_or_default()
    }

    /// Toggle payout eligibility of a token
    pub fn set_payout_token(&mut self, token: Address, enabled: bool) {
        if is_zero_address(&token) {
            self.env().revert(DistributorError::InvalidAddress);
        }
        self.payout_token_enabled.set(&token, enabled);
        self.env().emit_event(PayoutTokenUpdated { token, enabled });
    }

    /// Add `amount` of `token` to an account's pending balance
    pub fn credit(&mut self, account: Address, token: Address, amount: U256) {
        if is_zero_address(&account) || is_zero_address(&token) {
            self.env().revert(DistributorError::InvalidAddress);
        }
        if amount.is_zero() {
            self.env().revert(DistributorError::InvalidAmount);
        }

        let updated = self.pending(account, token).checked_add(amount).unwrap_or_else(|| {
            self.env().revert(DistributorError::MathOverflow);
        });
        self.pending_token_rewards.set(&(account, token), updated);

        self.env().emit_event(TokenRewardCredited {
            account,
            token,
            amount,
        });
    }

    /// Zero an account's pending balance of `token`
    pub fn clear(&mut self, account: Address, token: Address) {
        self.pending_token_rewards.set(&(account, token), U256::zero());
    }
}
