pub mod breakdown;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::duration::ElapsedDuration;

pub use breakdown::{breakdown, InterestBreakdown, InterestSegment, SegmentUnit};

/// how interest builds up across whole years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InterestMode {
    /// every stage accrues on the original principal
    Simple,
    /// each full year accrues on the running balance
    #[default]
    Compound,
}

impl InterestMode {
    pub fn from_compound_flag(compound: bool) -> Self {
        if compound { InterestMode::Compound } else { InterestMode::Simple }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, InterestMode::Compound)
    }
}

/// interest for one full year on `base`
pub(crate) fn year_interest(base: Money, annual_rate: Rate) -> Money {
    base.simple_interest(annual_rate, 1)
}

/// simple interest for `months` months on `base`
pub(crate) fn month_interest(base: Money, annual_rate: Rate, months: u32) -> Money {
    base.simple_interest(annual_rate.monthly_rate(), months)
}

/// simple interest for `days` days on `base`
pub(crate) fn day_interest(base: Money, annual_rate: Rate, days: u32) -> Money {
    base.simple_interest(annual_rate.daily_rate(), days)
}

/// engine for payable amount calculations
///
/// Whole years compound (or not) according to the mode; leftover months
/// accrue at rate/12 and leftover days at rate/365, each once, on the
/// balance reached by the previous stage (compound) or on the principal
/// (simple).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterestEngine {
    pub mode: InterestMode,
}

impl InterestEngine {
    pub fn new(mode: InterestMode) -> Self {
        Self { mode }
    }

    /// unrounded amount payable after `total_months` months and `total_days` days
    pub fn accrued_amount(
        &self,
        principal: Money,
        annual_rate: Rate,
        total_months: u32,
        total_days: u32,
    ) -> Money {
        let years = total_months / 12;
        let remainder_months = total_months % 12;

        match self.mode {
            InterestMode::Compound => {
                let mut amount = principal;
                for _ in 0..years {
                    amount += year_interest(amount, annual_rate);
                }
                amount += month_interest(amount, annual_rate, remainder_months);
                amount += day_interest(amount, annual_rate, total_days);
                amount
            }
            InterestMode::Simple => {
                let mut interest = Money::ZERO;
                for _ in 0..years {
                    interest += year_interest(principal, annual_rate);
                }
                interest += month_interest(principal, annual_rate, remainder_months);
                interest += day_interest(principal, annual_rate, total_days);
                principal + interest
            }
        }
    }

    /// amount payable, rounded to the nearest whole unit
    pub fn final_amount(
        &self,
        principal: Money,
        annual_rate: Rate,
        total_months: u32,
        total_days: u32,
    ) -> Money {
        self.accrued_amount(principal, annual_rate, total_months, total_days)
            .round_half_up()
    }

    /// amount payable for an elapsed duration
    pub fn final_amount_for(
        &self,
        principal: Money,
        annual_rate: Rate,
        elapsed: ElapsedDuration,
    ) -> Money {
        self.final_amount(principal, annual_rate, elapsed.total_months, elapsed.days)
    }

    /// rounded interest on top of the principal
    pub fn total_interest(
        &self,
        principal: Money,
        annual_rate: Rate,
        total_months: u32,
        total_days: u32,
    ) -> Money {
        let payable = self.final_amount(principal, annual_rate, total_months, total_days);
        payable - principal.round_half_up()
    }
}

/// amount payable, rounded to the nearest whole unit
pub fn final_amount(
    principal: Money,
    annual_rate: Rate,
    total_months: u32,
    total_days: u32,
    compound: bool,
) -> Money {
    InterestEngine::new(InterestMode::from_compound_flag(compound))
        .final_amount(principal, annual_rate, total_months, total_days)
}
