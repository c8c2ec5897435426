//! Accounting Ledger - global accumulator and per-account reward debt
//!
//! Holders are never iterated. A deposit raises `accumulated_per_share` by
//! `amount * SCALE / total_supply`; a holder's entitlement at any moment is
//! `balance * accumulated_per_share / SCALE - reward_debt`, where the balance
//! comes fresh from the share token on every call.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::DistributorError;
use crate::math::RewardMath;
use crate::token::Cep18TokenContractRef;

/// Ledger state of one distributor
#[odra::module]
pub struct AccountingLedger {
    /// Share token queried for ownership weights
    balance_oracle: Var<Address>,
    /// Cumulative reward per share, scaled by 1e12
    accumulated_per_share: Var<U256>,
    /// Native value ever deposited
    total_distributed: Var<U256>,
    /// Native value ever claimed
    total_claimed: Var<U256>,
    /// Denominator for future deposits
    total_supply: Var<U256>,
    /// Floor-division remainder of all deposits
    recorded_dust: Var<U256>,
    /// Accrued reward at each account's last settlement
    reward_debt: Mapping<Address, U256>,
}

#[odra::module]
impl AccountingLedger {
    /// Initialize the ledger; callers validate the arguments
    pub fn init(&mut self, balance_oracle: Address, total_supply: U256) {
        if total_supply.is_zero() {
            self.env().revert(DistributorError::InvalidAmount);
        }
        self.balance_oracle.set(balance_oracle);
        self.total_supply.set(total_supply);
        self.accumulated_per_share.set(U256::zero());
        self.total_distributed.set(U256::zero());
        self.total_claimed.set(U256::zero());
        self.recorded_dust.set(U256::zero());
    }

    // ========================================
    // Reads
    // ========================================

    pub fn balance_oracle(&self) -> Address {
        self.balance_oracle.get_or_revert_with(DistributorError::InvalidAddress)
    }

    pub fn accumulated_per_share(&self) -> U256 {
        self.accumulated_per_share.get_or_default()
    }

    pub fn total_distributed(&self) -> U256 {
        self.total_distributed.get_or_default()
    }

    pub fn total_claimed(&self) -> U256 {
        self.total_claimed.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn recorded_dust(&self) -> U256 {
        self.recorded_dust.get_or_default()
    }

    pub fn reward_debt(&self, account: Address) -> U256 {
        self.reward_debt.get(&account).unwrap_or_default()
    }

    /// Current ownership weight of an account, straight from the oracle
    pub fn holder_balance(&self, account: Address) -> U256 {
        let oracle = Cep18TokenContractRef::new(self.env(), self.balance_oracle());
        oracle.balance_of(account)
    }

    /// Native reward claimable by an account right now
    pub fn pending_reward(&self, account: Address) -> U256 {
        let balance = self.holder_balance(account);
        self.checked(RewardMath::pending(
            balance,
            self.accumulated_per_share(),
            self.reward_debt(account),
        ))
    }

    // ========================================
    // Writes
    // ========================================

    /// Fold a deposit into the accumulator; returns the new accumulator
    pub fn record_deposit(&mut self, amount: U256) -> U256 {
        let total_supply = self.total_supply();
        let increment = self.checked(RewardMath::accumulator_increment(amount, total_supply));
        let dust = self.checked(RewardMath::deposit_dust(amount, increment, total_supply));

        let accumulated = self.checked_add(self.accumulated_per_share(), increment);
        let distributed = self.checked_add(self.total_distributed(), amount);
        let recorded_dust = self.checked_add(self.recorded_dust(), dust);

        self.accumulated_per_share.set(accumulated);
        self.total_distributed.set(distributed);
        self.recorded_dust.set(recorded_dust);

        accumulated
    }

    /// Replace the denominator for future deposits; returns the old one.
    /// The accumulator and every reward debt stay untouched.
    pub fn set_total_supply(&mut self, new_supply: U256) -> U256 {
        if new_supply.is_zero() {
            self.env().revert(DistributorError::InvalidAmount);
        }
        let old_supply = self.total_supply();
        self.total_supply.set(new_supply);
        old_supply
    }

    /// Move an account's baseline up to its current accrual and count
    /// `amount` as claimed
    pub fn settle(&mut self, account: Address, amount: U256) {
        let balance = self.holder_balance(account);
        let accrued = self.checked(RewardMath::accrued(balance, self.accumulated_per_share()));
        let claimed = self.checked_add(self.total_claimed(), amount);

        self.reward_debt.set(&account, accrued);
        self.total_claimed.set(claimed);
    }
}

impl AccountingLedger {
    fn checked(&self, result: Result<U256, DistributorError>) -> U256 {
        result.unwrap_or_else(|err| self.env().revert(err))
    }

    fn checked_add(&self, a: U256, b: U256) -> U256 {
        a.checked_add(b).unwrap_or_else(|| {
            self.env().revert(DistributorError::MathOverflow);
        })
    }
}
