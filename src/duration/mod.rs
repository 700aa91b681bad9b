pub mod billing;

use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::CalendarDate;

pub use billing::{rounded_elapsed_months_and_days, BillingPolicy, HALF_MONTH_DAYS};

/// elapsed time as whole calendar months plus a day remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElapsedDuration {
    pub total_months: u32,
    pub days: u32,
}

impl ElapsedDuration {
    pub fn new(total_months: u32, days: u32) -> Self {
        Self { total_months, days }
    }

    /// whole years contained in the month count
    pub fn years(&self) -> u32 {
        self.total_months / 12
    }

    /// months left after removing whole years
    pub fn remainder_months(&self) -> u32 {
        self.total_months % 12
    }

    pub fn is_zero(&self) -> bool {
        self.total_months == 0 && self.days == 0
    }
}

impl fmt::Display for ElapsedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months {} days", self.total_months, self.days)
    }
}

/// elapsed months and days between two dates, counting both endpoints
///
/// When `end.day < start.day` one month is borrowed and the day count runs
/// through the month preceding `end`. A start day past the end of that month
/// is treated as its last day. Reversed ranges saturate at zero.
pub fn elapsed_months_and_days(start: CalendarDate, end: CalendarDate) -> ElapsedDuration {
    let mut months = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    let end_day = end.day() as i32;
    let start_day = start.day() as i32;

    let days = if end_day >= start_day {
        end_day - start_day + 1
    } else {
        months -= 1;
        let previous = end.days_in_previous_month() as i32;
        end_day + (previous - start_day.min(previous)) + 1
    };

    ElapsedDuration {
        total_months: months.max(0) as u32,
        days: days.max(0) as u32,
    }
}

/// elapsed months and days from `start` to `end`, or to today when no end is given
pub fn elapsed_until(
    start: CalendarDate,
    end: Option<CalendarDate>,
    time_provider: &SafeTimeProvider,
) -> ElapsedDuration {
    let end = end.unwrap_or_else(|| CalendarDate::today(time_provider));
    elapsed_months_and_days(start, end)
}
