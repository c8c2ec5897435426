//! Fixed-point reward arithmetic for the dividend distributor
//! All divisions round toward zero. Nothing here touches storage.
use odra::casper_types::{U256, U512};
use crate::errors::DistributorError;

/// Scale factor of the per-share accumulator (1e12)
pub const PRECISION_SCALE: u128 = 1_000_000_000_000;

/// Per-share reward calculations
pub struct RewardMath;

impl RewardMath {
    /// Scale factor as U256
    pub fn scale() -> U256 {
        U256::from(PRECISION_SCALE)
    }

    /// Accumulator increment for a deposit: floor(amount * SCALE / total_supply)
    pub fn accumulator_increment(amount: U256, total_supply: U256) -> Result<U256, DistributorError> {
        if total_supply.is_zero() {
            return Err(DistributorError::InvalidAmount);
        }
        let scaled = amount
            .checked_mul(Self::scale())
            .ok_or(DistributorError::MathOverflow)?;
        Ok(scaled / total_supply)
    }

    /// Reward owed to a balance at a given accumulator: floor(balance * acc / SCALE)
    pub fn accrued(balance: U256, accumulated_per_share: U256) -> Result<U256, DistributorError> {
        let product = balance
            .checked_mul(accumulated_per_share)
            .ok_or(DistributorError::MathOverflow)?;
        Ok(product / Self::scale())
    }

    /// Accrued reward minus the stored debt, saturating at zero.
    /// The floor is hit when a holder's balance dropped after its last settlement.
    pub fn pending(
        balance: U256,
        accumulated_per_share: U256,
        reward_debt: U256,
    ) -> Result<U256, DistributorError> {
        let accrued = Self::accrued(balance, accumulated_per_share)?;
        Ok(accrued.saturating_sub(reward_debt))
    }

    /// Part of a deposit that no holder can ever claim because of the
    /// increment's floor division: amount - floor(increment * supply / SCALE)
    pub fn deposit_dust(
        amount: U256,
        increment: U256,
        total_supply: U256,
    ) -> Result<U256, DistributorError> {
        let attributed = increment
            .checked_mul(total_supply)
            .ok_or(DistributorError::MathOverflow)?
            / Self::scale();
        Ok(amount.saturating_sub(attributed))
    }
}

/// Convert attached native value to the accounting width
pub fn motes_to_amount(motes: U512) -> Result<U256, DistributorError> {
    if motes > U512::from(u128::MAX) {
        return Err(DistributorError::MathOverflow);
    }
    Ok(U256::from(motes.as_u128()))
}

/// Convert an accounting amount to native value for a transfer
pub fn amount_to_motes(amount: U256) -> Result<U512, DistributorError> {
    if amount > U256::from(u128::MAX) {
        return Err(DistributorError::MathOverflow);
    }
    Ok(U512::from(amount.as_u128()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_uses_floor_division() {
        // 100 * 1e12 / 100_000 = 1e9 exactly
        let inc = RewardMath::accumulator_increment(U256::from(100), U256::from(100_000)).unwrap();
        assert_eq!(inc, U256::from(1_000_000_000u64));

        // 1 * 1e12 / 3 = 333_333_333_333.33.. -> floor
        let inc = RewardMath::accumulator_increment(U256::one(), U256::from(3)).unwrap();
        assert_eq!(inc, U256::from(333_333_333_333u64));
    }

    #[test]
    fn test_increment_rejects_zero_supply() {
        assert!(matches!(
            RewardMath::accumulator_increment(U256::from(10), U256::zero()),
            Err(DistributorError::InvalidAmount)
        ));
    }

    #[test]
    fn test_increment_overflow() {
        assert!(matches!(
            RewardMath::accumulator_increment(U256::MAX, U256::one()),
            Err(DistributorError::MathOverflow)
        ));
    }

    #[test]
    fn test_proportional_shares() {
        let supply = U256::from(100_000);
        let acc = RewardMath::accumulator_increment(U256::from(100), supply).unwrap();

        let a = RewardMath::pending(U256::from(10_000), acc, U256::zero()).unwrap();
        let b = RewardMath::pending(U256::from(30_000), acc, U256::zero()).unwrap();
        let c = RewardMath::pending(U256::from(60_000), acc, U256::zero()).unwrap();

        assert_eq!(a, U256::from(10));
        assert_eq!(b, U256::from(30));
        assert_eq!(c, U256::from(60));
        assert_eq!(a + b + c, U256::from(100));
    }

    #[test]
    fn test_pending_subtracts_debt_and_saturates() {
        let acc = U256::from(2_000_000_000_000u64); // 2.0 per share
        let debt = RewardMath::accrued(U256::from(50), acc).unwrap();
        assert_eq!(debt, U256::from(100));

        assert_eq!(RewardMath::pending(U256::from(50), acc, debt).unwrap(), U256::zero());
        assert_eq!(RewardMath::pending(U256::from(60), acc, debt).unwrap(), U256::from(20));
        // Balance shrank below the settled baseline
        assert_eq!(RewardMath::pending(U256::from(10), acc, debt).unwrap(), U256::zero());
    }

    #[test]
    fn test_exact_round_trip_for_sole_holder() {
        let supply = U256::from(1_000);
        for value in [1u64, 7, 777, 1_000, 123_456_789] {
            let acc = RewardMath::accumulator_increment(U256::from(value), supply).unwrap();
            let pending = RewardMath::pending(supply, acc, U256::zero()).unwrap();
            assert_eq!(pending, U256::from(value));
            assert_eq!(
                RewardMath::deposit_dust(U256::from(value), acc, supply).unwrap(),
                U256::zero()
            );
        }
    }

    #[test]
    fn test_conservation_over_many_deposits() {
        let supply = U256::from(7_919u64);
        let balances = [U256::from(1_000u64), U256::from(2_919u64), U256::from(4_000u64)];
        let mut acc = U256::zero();
        let mut total = U256::zero();
        let mut dust = U256::zero();

        for i in 1u64..=50 {
            let amount = U256::from(i * 9_973 % 1_237 + 1);
            let inc = RewardMath::accumulator_increment(amount, supply).unwrap();
            dust = dust + RewardMath::deposit_dust(amount, inc, supply).unwrap();
            acc = acc + inc;
            total = total + amount;
        }

        let sum = balances
            .iter()
            .map(|b| RewardMath::pending(*b, acc, U256::zero()).unwrap())
            .fold(U256::zero(), |s, p| s + p);

        assert!(sum <= total);
        // One unit per holder from the final floor, plus the accumulator remainder
        assert!(total - sum <= U256::from(balances.len() as u64) + dust + U256::one());
    }

    #[test]
    fn test_motes_conversion() {
        assert_eq!(motes_to_amount(U512::from(42u64)).unwrap(), U256::from(42));
        assert_eq!(amount_to_motes(U256::from(42)).unwrap(), U512::from(42u64));
        assert!(matches!(
            motes_to_amount(U512::from(u128::MAX) + U512::one()),
            Err(DistributorError::MathOverflow)
        ));
        assert!(matches!(
            amount_to_motes(U256::from(u128::MAX) + U256::one()),
            Err(DistributorError::MathOverflow)
        ));
    }
}
