//! Dividend distribution for fractionalized assets
//!
//! Holders of a share token pull their proportional part of every native
//! deposit; the owner can additionally push CEP-18 rewards to individual
//! accounts.

pub mod dividend_distributor;
pub mod ledger;
pub mod token_credit;


pub use dividend_distributor::{DividendDistributor, RewardStats};
pub use ledger::AccountingLedger;
pub use token_credit::TokenCredits;
