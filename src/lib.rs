pub mod calendar;
pub mod collateral;
pub mod config;
pub mod decimal;
pub mod duration;
pub mod errors;
pub mod interest;
pub mod quote;

// re-export key types
pub use calendar::{CalendarDate, DateFormat};
pub use collateral::{max_tenure_months, TenureEstimate, TenureQuery, MAX_TENURE_MONTHS};
pub use config::{BillingConfig, LoanConfig, LoanTerms};
pub use decimal::{Money, Rate};
pub use duration::{
    elapsed_months_and_days, elapsed_until, rounded_elapsed_months_and_days, BillingPolicy,
    ElapsedDuration,
};
pub use errors::{LoanError, Result};
pub use interest::{
    breakdown, final_amount, InterestBreakdown, InterestEngine, InterestMode, InterestSegment,
    SegmentUnit,
};
pub use quote::LoanQuote;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
