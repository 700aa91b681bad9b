use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::duration::HALF_MONTH_DAYS;
use crate::interest::{day_interest, month_interest, year_interest, InterestMode};

/// unit of a breakdown row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentUnit {
    Year,
    Month,
    Days,
}

/// one row of the interest ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestSegment {
    /// year ordinal for year rows, month count or day count otherwise
    pub duration: u32,
    pub unit: SegmentUnit,
    /// balance the stage accrued on
    pub principal: Money,
    pub interest: Money,
    /// cumulative amount after the stage
    pub total: Money,
    /// percentage shown next to the row
    pub roi: Decimal,
    /// fractional rate per unit applied in the stage
    pub rate: Rate,
}

/// chronological interest ledger: years, then leftover months, then leftover days
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestBreakdown {
    pub segments: Vec<InterestSegment>,
}

impl InterestBreakdown {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InterestSegment> {
        self.segments.iter()
    }

    /// sum of interest across all rows
    pub fn total_interest(&self) -> Money {
        self.segments
            .iter()
            .map(|s| s.interest)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// cumulative total of the last row, if any
    pub fn final_total(&self) -> Option<Money> {
        self.segments.last().map(|s| s.total)
    }
}

impl IntoIterator for InterestBreakdown {
    type Item = InterestSegment;
    type IntoIter = std::vec::IntoIter<InterestSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

/// running state while the ledger is built
struct Ledger {
    mode: InterestMode,
    principal: Money,
    balance: Money,
    total_interest: Money,
    segments: Vec<InterestSegment>,
}

impl Ledger {
    fn new(mode: InterestMode, principal: Money) -> Self {
        Self {
            mode,
            principal,
            balance: principal,
            total_interest: Money::ZERO,
            segments: Vec::new(),
        }
    }

    /// basis the next stage accrues on
    fn basis(&self) -> Money {
        match self.mode {
            InterestMode::Compound => self.balance,
            InterestMode::Simple => self.principal,
        }
    }

    fn record(
        &mut self,
        duration: u32,
        unit: SegmentUnit,
        basis: Money,
        interest: Money,
        roi: Decimal,
        rate: Rate,
    ) {
        self.total_interest += interest;
        let total = match self.mode {
            InterestMode::Compound => {
                self.balance += interest;
                self.balance
            }
            InterestMode::Simple => self.principal + self.total_interest,
        };

        self.segments.push(InterestSegment {
            duration,
            unit,
            principal: basis,
            interest,
            total,
            roi,
            rate,
        });
    }
}

/// interest accrued per year, leftover-month and leftover-day stage
pub fn breakdown(
    principal: Money,
    annual_rate: Rate,
    total_months: u32,
    total_days: u32,
    mode: InterestMode,
) -> InterestBreakdown {
    let years = total_months / 12;
    let remainder_months = total_months % 12;
    let monthly_roi = annual_rate.monthly_roi();
    let mut ledger = Ledger::new(mode, principal);

    for year in 1..=years {
        let basis = ledger.basis();
        let interest = year_interest(basis, annual_rate);
        let roi = annual_rate.as_percentage();
        ledger.record(year, SegmentUnit::Year, basis, interest, roi, annual_rate);
    }

    if remainder_months > 0 {
        let basis = ledger.basis();
        let interest = month_interest(basis, annual_rate, remainder_months);
        ledger.record(
            remainder_months,
            SegmentUnit::Month,
            basis,
            interest,
            monthly_roi,
            annual_rate.monthly_rate(),
        );
    }

    if total_days > 0 {
        let basis = ledger.basis();
        let interest = day_interest(basis, annual_rate, total_days);
        // half-month display rate; the interest itself is unchanged
        let roi = if total_days >= HALF_MONTH_DAYS {
            monthly_roi / Decimal::from(2)
        } else {
            monthly_roi
        };
        let daily_rate = annual_rate.daily_rate();
        ledger.record(total_days, SegmentUnit::Days, basis, interest, roi, daily_rate);
    }

    InterestBreakdown { segments: ledger.segments }
}
