//! Error definitions for the dividend distribution contracts
use odra::prelude::*;

/// Custom errors for the distributor, its access control and the registry
#[odra::odra_error]
pub enum DistributorError {
    /// Zero identity supplied where a real address is required
    InvalidAddress = 1,

    /// Amount or supply is zero
    InvalidAmount = 2,

    /// New owner is the zero identity
    InvalidOwner = 3,

    /// Caller is not the owner
    Unauthorized = 4,

    /// Deposits and claims are paused
    ContractPaused = 5,

    /// Requested amount exceeds the contract's custody balance
    InsufficientBalance = 6,

    /// Account has no pending reward
    NothingToClaim = 7,

    /// A mutating call is already in progress
    ReentrancyDetected = 8,

    /// Token transfer returned false
    TransferFailed = 9,

    /// Checked arithmetic overflowed
    MathOverflow = 10,

    /// Asset or share token already has a distributor
    DistributorExists = 11,

    /// Distributor does not track the given share token
    DistributorMismatch = 12,

    /// Registry index out of bounds
    IndexOutOfBounds = 13,
}

/// Custom errors for the share token
#[odra::odra_error]
pub enum TokenError {
    /// Insufficient balance for operation
    InsufficientBalance = 100,

    /// Caller is not the minter
    NotMinter = 101,
}
