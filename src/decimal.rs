use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// days in the interest year
pub const DAYS_PER_YEAR: u32 = 365;

/// months in the interest year
pub const MONTHS_PER_YEAR: u32 = 12;

/// rupee amount carried at 8 decimal places between stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(8))
    }

    /// parse an amount typed into a form
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s.trim())?.round_dp(8)))
    }

    /// create from whole rupees
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    /// round to the nearest whole rupee, halves going up (floor(x + 0.5))
    pub fn round_half_up(&self) -> Self {
        Money((self.0 + dec!(0.5)).floor())
    }

    /// strictly above zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// share of this amount (e.g., a 75% loan-to-value of an item value)
    pub fn percentage(&self, percent: Decimal) -> Self {
        Money((self.0 * percent / Decimal::from(100)).round_dp(8))
    }

    /// simple interest at `rate` per period for `periods` periods
    pub fn simple_interest(&self, rate: Rate, periods: u32) -> Self {
        Money((self.0 * rate.0 * Decimal::from(periods)).round_dp(8))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(8))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp(8);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(8))
    }
}

/// annual interest rate held as a fraction (0.36 for 36%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from an annual percentage (e.g., 36 for 36%)
    pub fn from_percentage(p: impl Into<Decimal>) -> Self {
        Rate(p.into() / Decimal::from(100))
    }

    /// create an annual rate from a monthly ROI percentage (e.g., 3 for 3% a month)
    pub fn from_monthly_roi(roi: impl Into<Decimal>) -> Self {
        Rate(roi.into() * Decimal::from(MONTHS_PER_YEAR) / Decimal::from(100))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }

    /// monthly ROI percentage shown on forms
    pub fn monthly_roi(&self) -> Decimal {
        self.as_percentage() / Decimal::from(MONTHS_PER_YEAR)
    }

    /// per-day share of the annual rate
    pub fn daily_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(DAYS_PER_YEAR))
    }

    /// per-month share of the annual rate
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(MONTHS_PER_YEAR))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_amount_parsing() {
        assert_eq!(Money::from_str_exact(" 95630 ").unwrap(), Money::from_major(95_630));
        // sub-paisa noise beyond the working precision is dropped
        let m = Money::from_str_exact("1593.840000004").unwrap();
        assert_eq!(m, Money::from_decimal(dec!(1593.84)));
        assert!(Money::from_str_exact("1,59,384").is_err());
    }

    #[test]
    fn test_round_half_up() {
        let rounded = |s: &str| Money::from_str_exact(s).unwrap().round_half_up();
        assert_eq!(rounded("16975.2619"), Money::from_major(16975));
        assert_eq!(rounded("10.5"), Money::from_major(11));
        assert_eq!(rounded("11.5"), Money::from_major(12));
        assert_eq!(rounded("10.49999999"), Money::from_major(10));
    }

    #[test]
    fn test_monthly_roi_is_annualised() {
        let rate = Rate::from_monthly_roi(3);
        assert_eq!(rate, Rate::from_percentage(36));
        assert_eq!(rate.monthly_roi(), dec!(3));

        let fractional = Rate::from_monthly_roi(dec!(1.5));
        assert_eq!(fractional.as_percentage(), dec!(18));
    }

    #[test]
    fn test_sub_rates() {
        let rate = Rate::from_percentage(36);
        assert_eq!(rate.monthly_rate().as_decimal(), dec!(0.03));
        assert_eq!(rate.daily_rate().as_decimal(), dec!(0.36) / dec!(365));
    }

    #[test]
    fn test_simple_interest_and_share() {
        let principal = Money::from_major(10_000);
        let rate = Rate::from_percentage(24);

        assert_eq!(principal.simple_interest(rate.monthly_rate(), 6), Money::from_major(1_200));
        assert_eq!(principal.simple_interest(rate, 1), Money::from_major(2_400));
        assert_eq!(principal.percentage(dec!(75)), Money::from_major(7_500));
        assert_eq!(principal - Money::from_major(2_500), Money::from_major(7_500));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_percentage(36).to_string(), "36%");
    }
}
