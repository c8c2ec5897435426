//! Dividend Distributor - pull-based proportional rewards
//!
//! Anyone deposits CSPR; every holder of the share token later claims its
//! share without the depositor ever touching the holder set.
//!
//! Entry points:
//! - `deposit_native` / `claim_native`: per-share native rewards
//! - `credit_token_reward` / `claim_token`: owner-credited CEP-18 rewards
//! - `update_total_supply`, `set_payout_token`, `set_paused`,
//!   `transfer_ownership`, `emergency_withdraw`: owner administration
//!
//! Admin entry points stay open while paused so a stuck distributor can
//! still be administered.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::access::{is_zero_address, Ownable, Pausable, ReentrancyGuard};
use crate::errors::DistributorError;
use crate::events::*;
use crate::math::{amount_to_motes, motes_to_amount};
use crate::token::Cep18TokenContractRef;
use super::ledger::AccountingLedger;
use super::token_credit::TokenCredits;

/// Snapshot of the distributor's accounting for dashboards
#[odra::odra_type]
pub struct RewardStats {
    /// Cumulative reward per share (scaled by 1e12)
    pub accumulated_per_share: U256,
    /// Native value ever deposited
    pub total_distributed: U256,
    /// Native value ever claimed
    pub total_claimed: U256,
    /// Current deposit denominator
    pub total_supply: U256,
    /// Floor-division remainder held in custody
    pub recorded_dust: U256,
    /// Native custody balance
    pub native_balance: U256,
    /// Pause state
    pub paused: bool,
}

/// Dividend Distributor contract
#[odra::module]
pub struct DividendDistributor {
    /// Owner capability
    ownable: SubModule<Ownable>,
    /// Deposit / claim gate
    pausable: SubModule<Pausable>,
    /// Reentrancy lock
    guard: SubModule<ReentrancyGuard>,
    /// Per-share accounting
    ledger: SubModule<AccountingLedger>,
    /// Alternate-token credits
    token_credits: SubModule<TokenCredits>,
}

#[odra::module]
impl DividendDistributor {
    /// Initialize the distributor
    ///
    /// # Arguments
    /// * `balance_oracle` - Share token whose balances weight the rewards
    /// * `total_supply` - Initial deposit denominator
    /// * `owner` - Administrative identity
    pub fn init(&mut self, balance_oracle: Address, total_supply: U256, owner: Address) {
        if is_zero_address(&balance_oracle) || is_zero_address(&owner) {
            self.env().revert(DistributorError::InvalidAddress);
        }
        if total_supply.is_zero() {
            self.env().revert(DistributorError::InvalidAmount);
        }

        self.ledger.init(balance_oracle, total_supply);
        self.pausable.init();
        self.ownable.init(owner);
    }

    // ========================================
    // Native rewards
    // ========================================

    /// Deposit the attached CSPR for all current share holders
    ///
    /// # Returns
    /// The accumulator value after the deposit
    #[odra(payable)]
    pub fn deposit_native(&mut self) -> U256 {
        self.guard.enter();
        self.pausable.ensure_not_paused();

        let attached = self.env().attached_value();
        let amount = motes_to_amount(attached).unwrap_or_else(|err| self.env().revert(err));
        if amount.is_zero() {
            self.env().revert(DistributorError::InvalidAmount);
        }

        let accumulated_per_share = self.ledger.record_deposit(amount);

        self.env().emit_event(DepositRecorded {
            depositor: self.env().caller(),
            amount,
            accumulated_per_share,
        });

        self.guard.exit();
        accumulated_per_share
    }

    /// Claim the caller's pending native reward
    ///
    /// # Returns
    /// The amount paid out
    pub fn claim_native(&mut self) -> U256 {
        self.guard.enter();
        self.pausable.ensure_not_paused();

        let caller = self.env().caller();
        let amount = self.ledger.pending_reward(caller);
        if amount.is_zero() {
            self.env().revert(DistributorError::NothingToClaim);
        }

        let motes = amount_to_motes(amount).unwrap_or_else(|err| self.env().revert(err));
        if motes > self.env().self_balance() {
            self.env().revert(DistributorError::InsufficientBalance);
        }

        // Settle first; a failed transfer reverts the settlement with it
        self.ledger.settle(caller, amount);
        self.env().transfer_tokens(&caller, &motes);

        self.env().emit_event(RewardClaimed {
            account: caller,
            amount,
        });

        self.guard.exit();
        amount
    }

    // ========================================
    // Alternate-token rewards
    // ========================================

    /// Credit a CEP-18 reward to an account (owner only)
    pub fn credit_token_reward(&mut self, account: Address, token: Address, amount: U256) {
        self.ownable.assert_owner();
        self.token_credits.credit(account, token, amount);
    }

    /// Claim the caller's pending reward in `token`
    ///
    /// # Returns
    /// The amount paid out
    pub fn claim_token(&mut self, token: Address) -> U256 {
        self.guard.enter();
        self.pausable.ensure_not_paused();

        let caller = self.env().caller();
        let amount = self.token_credits.pending(caller, token);
        if amount.is_zero() {
            self.env().revert(DistributorError::NothingToClaim);
        }

        let mut payout = Cep18TokenContractRef::new(self.env(), token);
        if payout.balance_of(self.env().self_address()) < amount {
            self.env().revert(DistributorError::InsufficientBalance);
        }

        self.token_credits.clear(caller, token);
        if !payout.transfer(caller, amount) {
            self.env().revert(DistributorError::TransferFailed);
        }

        self.env().emit_event(TokenRewardClaimed {
            account: caller,
            token,
            amount,
        });

        self.guard.exit();
        amount
    }

    /// Flag a token as eligible for payouts (owner only)
    pub fn set_payout_token(&mut self, token: Address, enabled: bool) {
        self.ownable.assert_owner();
        self.token_credits.set_payout_token(token, enabled);
    }

    // ========================================
    // Administration
    // ========================================

    /// Replace the deposit denominator for future deposits (owner only)
    pub fn update_total_supply(&mut self, new_supply: U256) {
        self.ownable.assert_owner();
        let old_supply = self.ledger.set_total_supply(new_supply);

        self.env().emit_event(TotalSupplyUpdated {
            old_supply,
            new_supply,
        });
    }

    /// Open or close the deposit / claim gate (owner only)
    pub fn set_paused(&mut self, paused: bool) {
        self.ownable.assert_owner();
        self.pausable.set_paused(paused);
    }

    /// Hand the owner capability to another account (owner only)
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.ownable.transfer_ownership(new_owner);
    }

    /// Move custody funds out without touching the accounting (owner only)
    ///
    /// The ledger may end up promising more than it holds; reconciling that
    /// is left to the operator.
    ///
    /// # Arguments
    /// * `to` - Recipient
    /// * `native_amount` - CSPR to send (motes)
    /// * `token` - CEP-18 token to send, if any
    /// * `token_amount` - Amount of `token` to send
    pub fn emergency_withdraw(
        &mut self,
        to: Address,
        native_amount: U256,
        token: Option<Address>,
        token_amount: U256,
    ) {
        self.ownable.assert_owner();
        self.guard.enter();

        if is_zero_address(&to) {
            self.env().revert(DistributorError::InvalidAddress);
        }
        if native_amount.is_zero() && token_amount.is_zero() {
            self.env().revert(DistributorError::InvalidAmount);
        }

        let motes = amount_to_motes(native_amount).unwrap_or_else(|err| self.env().revert(err));
        if motes > self.env().self_balance() {
            self.env().revert(DistributorError::InsufficientBalance);
        }

        let payout = if token_amount.is_zero() {
            None
        } else {
            let token_address = match token {
                Some(address) if !is_zero_address(&address) => address,
                _ => self.env().revert(DistributorError::InvalidAddress),
            };
            let payout = Cep18TokenContractRef::new(self.env(), token_address);
            if payout.balance_of(self.env().self_address()) < token_amount {
                self.env().revert(DistributorError::InsufficientBalance);
            }
            Some(payout)
        };

        if !motes.is_zero() {
            self.env().transfer_tokens(&to, &motes);
        }
        if let Some(mut payout) = payout {
            if !payout.transfer(to, token_amount) {
                self.env().revert(DistributorError::TransferFailed);
            }
        }

        self.env().emit_event(EmergencyWithdraw {
            to,
            native_amount,
            token,
            token_amount,
        });

        self.guard.exit();
    }

    // ========================================
    // View Functions
    // ========================================

    /// Native reward claimable by `account`; available while paused
    pub fn pending_reward(&self, account: Address) -> U256 {
        self.ledger.pending_reward(account)
    }

    /// Reward debt baseline of `account`
    pub fn reward_debt(&self, account: Address) -> U256 {
        self.ledger.reward_debt(account)
    }

    /// Ownership weight of `account` as reported by the share token
    pub fn holder_balance(&self, account: Address) -> U256 {
        self.ledger.holder_balance(account)
    }

    pub fn accumulated_per_share(&self) -> U256 {
        self.ledger.accumulated_per_share()
    }

    pub fn total_distributed(&self) -> U256 {
        self.ledger.total_distributed()
    }

    pub fn total_claimed(&self) -> U256 {
        self.ledger.total_claimed()
    }

    pub fn total_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    /// Cumulative floor-division remainder; stays in custody
    pub fn recorded_dust(&self) -> U256 {
        self.ledger.recorded_dust()
    }

    pub fn balance_oracle(&self) -> Address {
        self.ledger.balance_oracle()
    }

    /// Native custody balance in motes
    pub fn native_balance(&self) -> U256 {
        motes_to_amount(self.env().self_balance()).unwrap_or_else(|err| self.env().revert(err))
    }

    pub fn is_paused(&self) -> bool {
        self.pausable.is_paused()
    }

    pub fn owner(&self) -> Address {
        self.ownable.get_owner()
    }

    pub fn is_owner(&self, account: Address) -> bool {
        self.ownable.is_owner(account)
    }

    pub fn payout_token_enabled(&self, token: Address) -> bool {
        self.token_credits.is_enabled(token)
    }

    pub fn pending_token_reward(&self, account: Address, token: Address) -> U256 {
        self.token_credits.pending(account, token)
    }

    /// All headline figures in one call
    pub fn reward_stats(&self) -> RewardStats {
        RewardStats {
            accumulated_per_share: self.ledger.accumulated_per_share(),
            total_distributed: self.ledger.total_distributed(),
            total_claimed: self.ledger.total_claimed(),
            total_supply: self.ledger.total_supply(),
            recorded_dust: self.ledger.recorded_dust(),
            native_balance: self.native_balance(),
            paused: self.pausable.is_paused(),
        }
    }
}
