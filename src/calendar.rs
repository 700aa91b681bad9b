use chrono::{DateTime, Datelike, NaiveDate, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{LoanError, Result};

/// textual date layouts accepted at the form boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// "DD-MM-YYYY"
    DayMonthYear,
    /// "YYYY-MM-DD"
    YearMonthDay,
}

impl DateFormat {
    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "%d-%m-%Y",
            DateFormat::YearMonthDay => "%Y-%m-%d",
        }
    }
}

/// a proleptic gregorian calendar date with no time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// create from year, month (1-12) and day (1-31)
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| LoanError::InvalidDate {
                message: format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
            })
    }

    /// parse a form value in an explicitly named layout
    pub fn parse(text: &str, format: DateFormat) -> Result<Self> {
        NaiveDate::parse_from_str(text.trim(), format.pattern())
            .map(CalendarDate)
            .map_err(|e| LoanError::InvalidDate {
                message: format!("'{}' does not match {:?}: {}", text, format, e),
            })
    }

    /// current date according to the time provider
    pub fn today(time_provider: &SafeTimeProvider) -> Self {
        CalendarDate::from(time_provider.now())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// number of days in the month immediately before this date's month
    pub fn days_in_previous_month(&self) -> u32 {
        let (year, month) = if self.month() == 1 {
            (self.year() - 1, 12)
        } else {
            (self.year(), self.month() - 1)
        };
        days_in_month(year, month)
    }

    /// format as "DD-MM-YYYY" or "YYYY-MM-DD"
    pub fn format(&self, format: DateFormat) -> String {
        self.0.format(format.pattern()).to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(DateFormat::YearMonthDay))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl From<DateTime<Utc>> for CalendarDate {
    fn from(timestamp: DateTime<Utc>) -> Self {
        CalendarDate(timestamp.date_naive())
    }
}

/// days in a given month of a given year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// check if year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
