use crate::error::FeeError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Currency-minor-unit precision: two decimal places for USD cents.
const MONEY_SCALE: u32 = 2;

/// Divisor converting basis points to a rate (1 bp = 0.01%).
const BASIS_POINT_DIVISOR: Decimal = dec!(10000);

/// Rounds a monetary value to minor-unit precision.
///
/// The platform-wide rule is round-half-away-from-zero ("commercial"
/// rounding): $0.125 rounds to $0.13. Applied after every accumulation step,
/// not only at display time, so totals never drift from their printed form.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// The fee rates the platform charges, expressed in basis points.
///
/// Both observed rates are 0.5% (50 bp), but they are configured
/// independently so the schedule can diverge without a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Rate applied to every completed income transaction.
    pub platform_fee_bps: u32,
    /// Rate applied to every completed withdrawal.
    pub withdrawal_fee_bps: u32,
}

impl FeeSchedule {
    /// Fee charged on an income transaction of `amount`.
    pub fn platform_fee(&self, amount: Decimal) -> Result<Decimal, FeeError> {
        Self::apply_rate(amount, self.platform_fee_bps)
    }

    /// Fee charged on a withdrawal of `amount`.
    pub fn withdrawal_fee(&self, amount: Decimal) -> Result<Decimal, FeeError> {
        Self::apply_rate(amount, self.withdrawal_fee_bps)
    }

    fn apply_rate(amount: Decimal, bps: u32) -> Result<Decimal, FeeError> {
        if amount.is_sign_negative() {
            return Err(FeeError::InvalidAmount(amount));
        }
        let rate = Decimal::from(bps) / BASIS_POINT_DIVISOR;
        Ok(round_money(amount * rate))
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            platform_fee_bps: 50,
            withdrawal_fee_bps: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_percent_of_round_amounts() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.platform_fee(dec!(1000)).unwrap(), dec!(5.00));
        assert_eq!(schedule.withdrawal_fee(dec!(250)).unwrap(), dec!(1.25));
        assert_eq!(schedule.platform_fee(dec!(0)).unwrap(), dec!(0.00));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.5% of 2.50 is 0.0125, which must round up to 0.02, not down.
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.platform_fee(dec!(2.50)).unwrap(), dec!(0.02));
        assert_eq!(schedule.platform_fee(dec!(2.40)).unwrap(), dec!(0.01));
        assert_eq!(round_money(dec!(0.125)), dec!(0.13));
        assert_eq!(round_money(dec!(0.124)), dec!(0.12));
    }

    #[test]
    fn scales_linearly_modulo_rounding() {
        let schedule = FeeSchedule::default();
        let base = schedule.platform_fee(dec!(123.45)).unwrap();
        let shifted = schedule.platform_fee(dec!(1123.45)).unwrap();
        // Adding $1000 adds exactly $5.00 of fee at 50 bp.
        assert_eq!(shifted - base, dec!(5.00));
    }

    #[test]
    fn rejects_negative_amounts() {
        let schedule = FeeSchedule::default();
        assert!(matches!(
            schedule.platform_fee(dec!(-1)),
            Err(FeeError::InvalidAmount(_))
        ));
        assert!(matches!(
            schedule.withdrawal_fee(dec!(-0.01)),
            Err(FeeError::InvalidAmount(_))
        ));
    }
}
