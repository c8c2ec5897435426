//! Event definitions for the dividend distribution contracts
use odra::prelude::*;
use odra::casper_types::U256;
use odra::prelude::Address;

/// Event emitted when native value is deposited into the accumulator
#[odra::event]
pub struct DepositRecorded {
    /// Address of the depositor
    pub depositor: Address,
    /// Amount deposited (motes)
    pub amount: U256,
    /// Accumulator value after the deposit
    pub accumulated_per_share: U256,
}

/// Event emitted when a holder claims native rewards
#[odra::event]
pub struct RewardClaimed {
    /// Claiming account
    pub account: Address,
    /// Amount paid out (motes)
    pub amount: U256,
}

/// Event emitted when the owner credits an alternate-token reward
#[odra::event]
pub struct TokenRewardCredited {
    /// Credited account
    pub account: Address,
    /// Payout token
    pub token: Address,
    /// Amount credited
    pub amount: U256,
}

/// Event emitted when a holder claims an alternate-token reward
#[odra::event]
pub struct TokenRewardClaimed {
    /// Claiming account
    pub account: Address,
    /// Payout token
    pub token: Address,
    /// Amount paid out
    pub amount: U256,
}

/// Event emitted when the accounting denominator changes
#[odra::event]
pub struct TotalSupplyUpdated {
    /// Previous supply
    pub old_supply: U256,
    /// New supply
    pub new_supply: U256,
}

/// Event emitted when a payout token is enabled or disabled
#[odra::event]
pub struct PayoutTokenUpdated {
    /// Payout token
    pub token: Address,
    /// Whether the token is eligible
    pub enabled: bool,
}

/// Event emitted when the pause state changes
#[odra::event]
pub struct PauseStateChanged {
    /// New pause state
    pub paused: bool,
}

/// Event emitted when the owner extracts funds outside normal accounting
#[odra::event]
pub struct EmergencyWithdraw {
    /// Recipient
    pub to: Address,
    /// Native amount withdrawn (motes)
    pub native_amount: U256,
    /// Token withdrawn, if any
    pub token: Option<Address>,
    /// Token amount withdrawn
    pub token_amount: U256,
}

/// Event emitted when ownership changes hands
#[odra::event]
pub struct OwnershipTransferred {
    /// Previous owner, `None` on initialization
    pub previous_owner: Option<Address>,
    /// New owner
    pub new_owner: Address,
}

/// Event emitted when a distributor is added to the registry
#[odra::event]
pub struct DistributorRegistered {
    /// Fractionalized asset
    pub asset: Address,
    /// Share token used as the balance oracle
    pub share_token: Address,
    /// Distributor contract
    pub distributor: Address,
    /// Total number of registered distributors
    pub distributor_count: u32,
}

/// Event emitted when share tokens move
#[odra::event]
pub struct Transfer {
    /// From address
    pub from: Address,
    /// To address
    pub to: Address,
    /// Amount transferred
    pub value: U256,
}
