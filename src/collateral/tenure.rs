use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::interest::{InterestEngine, InterestMode};

/// search bound for the tenure scan (30 years)
pub const MAX_TENURE_MONTHS: u32 = 360;

/// how long a pledged item can carry a loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenureQuery {
    pub loan_amount: Money,
    pub item_value: Money,
    pub annual_rate: Rate,
}

/// result of a tenure search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureEstimate {
    pub months: u32,
    /// false when the scan stopped at the cap rather than at the item value
    pub bounded: bool,
}

impl TenureQuery {
    pub fn new(loan_amount: Money, item_value: Money, annual_rate: Rate) -> Self {
        Self {
            loan_amount,
            item_value,
            annual_rate,
        }
    }

    /// loan sized as `ltv_percent` of the item value
    pub fn from_ltv(
        item_value: Money,
        ltv_percent: Decimal,
        annual_rate: Rate,
    ) -> Result<Self> {
        if !item_value.is_positive() {
            return Err(LoanError::InvalidAmount { amount: item_value });
        }
        if ltv_percent <= Decimal::ZERO || ltv_percent > Decimal::from(100) {
            return Err(LoanError::InvalidConfiguration {
                message: format!("loan-to-value must be within (0, 100], got {}", ltv_percent),
            });
        }

        Ok(Self::new(item_value.percentage(ltv_percent), item_value, annual_rate))
    }

    /// scan with the default 360 month cap
    pub fn solve(&self) -> TenureEstimate {
        self.solve_capped(MAX_TENURE_MONTHS)
    }

    pub fn solve_capped(&self, cap: u32) -> TenureEstimate {
        let months =
            max_tenure_months_capped(self.loan_amount, self.item_value, self.annual_rate, cap);
        let bounded = months < cap;
        if !bounded {
            warn!(
                loan_amount = %self.loan_amount,
                item_value = %self.item_value,
                annual_rate = %self.annual_rate,
                cap,
                "tenure could not be bounded below the cap"
            );
        }
        TenureEstimate { months, bounded }
    }
}

/// largest month count whose compounded loan stays within the item value
pub fn max_tenure_months(loan_amount: Money, item_value: Money, annual_rate: Rate) -> u32 {
    max_tenure_months_capped(loan_amount, item_value, annual_rate, MAX_TENURE_MONTHS)
}

/// as [`max_tenure_months`] with an explicit cap
///
/// Each step recomputes the payable amount from `loan_amount` (compound years
/// plus simple leftover months, no days), rounded to whole rupees the same way
/// [`InterestEngine::final_amount`] is. A loan already above the item value
/// yields zero.
pub fn max_tenure_months_capped(
    loan_amount: Money,
    item_value: Money,
    annual_rate: Rate,
    cap: u32,
) -> u32 {
    let engine = InterestEngine::new(InterestMode::Compound);
    let mut months = 0;

    loop {
        if months >= cap {
            debug!(cap, "tenure scan reached cap");
            return cap;
        }
        months += 1;

        let current_amount = engine.final_amount(loan_amount, annual_rate, months, 0);
        if current_amount > item_value {
            debug!(months = months - 1, %current_amount, "tenure scan exceeded item value");
            return months - 1;
        }
    }
}
