use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::CalendarDate;
use crate::config::LoanConfig;
use crate::decimal::{Money, Rate};
use crate::duration::{elapsed_months_and_days, ElapsedDuration};
use crate::errors::{LoanError, Result};
use crate::interest::{breakdown, InterestBreakdown, InterestMode};

/// payable amount for a kalam loan between two dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub principal: Money,
    pub annual_rate: Rate,
    pub interest_mode: InterestMode,
    /// months and days between the dates, both inclusive
    pub elapsed: ElapsedDuration,
    /// duration interest was charged for
    pub billed: ElapsedDuration,
    pub final_amount: Money,
    pub total_interest: Money,
    pub breakdown: InterestBreakdown,
}

impl LoanQuote {
    /// quote up to `end`, or up to today when no end date is given
    pub fn generate(
        config: &LoanConfig,
        start: CalendarDate,
        end: Option<CalendarDate>,
        time_provider: &SafeTimeProvider,
    ) -> Result<Self> {
        config.validate()?;

        let end = end.unwrap_or_else(|| CalendarDate::today(time_provider));
        if end < start {
            return Err(LoanError::InvalidDateRange { start, end });
        }

        let elapsed = elapsed_months_and_days(start, end);
        let billed = if config.billing.round_duration {
            config.billing.policy().round(elapsed)
        } else {
            elapsed
        };

        let terms = config.terms;
        let engine = config.billing.engine();
        let final_amount = engine.final_amount_for(terms.principal, terms.annual_rate, billed);
        let ledger = breakdown(
            terms.principal,
            terms.annual_rate,
            billed.total_months,
            billed.days,
            config.billing.interest_mode,
        );

        debug!(
            %start,
            %end,
            %elapsed,
            %billed,
            %final_amount,
            "generated loan quote"
        );

        Ok(Self {
            start,
            end,
            principal: terms.principal,
            annual_rate: terms.annual_rate,
            interest_mode: config.billing.interest_mode,
            elapsed,
            billed,
            final_amount,
            total_interest: final_amount - terms.principal.round_half_up(),
            breakdown: ledger,
        })
    }

    /// quote against the system clock
    pub fn generate_now(config: &LoanConfig, start: CalendarDate) -> Result<Self> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        Self::generate(config, start, None, &time)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
