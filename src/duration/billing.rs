use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::duration::{elapsed_months_and_days, ElapsedDuration};

/// days billed for a partial month that falls in the half-month bucket
pub const HALF_MONTH_DAYS: u32 = 15;

/// snaps raw durations to the buckets interest is billed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillingPolicy {
    /// forgive a single day of partial-month interest
    pub waive_one_day_grace: bool,
}

impl BillingPolicy {
    pub fn new(waive_one_day_grace: bool) -> Self {
        Self { waive_one_day_grace }
    }

    /// smallest day remainder that is billed as a half month
    pub fn days_threshold(&self) -> u32 {
        if self.waive_one_day_grace { 2 } else { 1 }
    }

    /// round a raw duration to whole or half months
    ///
    /// A lone day on the fallthrough path is always waived, whatever the
    /// grace flag says; the flag only moves the lower edge of the half-month
    /// bucket.
    pub fn round(&self, elapsed: ElapsedDuration) -> ElapsedDuration {
        let ElapsedDuration { total_months: months, days } = elapsed;

        if months == 0 && days > 1 {
            return ElapsedDuration::new(1, 0);
        }

        if months > 0 {
            if (self.days_threshold()..=HALF_MONTH_DAYS).contains(&days) {
                return ElapsedDuration::new(months, HALF_MONTH_DAYS);
            }
            if days > HALF_MONTH_DAYS {
                return ElapsedDuration::new(months + 1, 0);
            }
        }

        ElapsedDuration::new(months, if days == 1 { 0 } else { days })
    }
}

/// elapsed months and days between two dates, rounded for billing
pub fn rounded_elapsed_months_and_days(
    start: CalendarDate,
    end: CalendarDate,
    waive_one_day_grace: bool,
) -> ElapsedDuration {
    BillingPolicy::new(waive_one_day_grace).round(elapsed_months_and_days(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_partial_first_month_counts_as_full_month() {
        let policy = BillingPolicy::default();
        assert_eq!(policy.round(ElapsedDuration::new(0, 2)), ElapsedDuration::new(1, 0));
        assert_eq!(policy.round(ElapsedDuration::new(0, 30)), ElapsedDuration::new(1, 0));
    }

    #[test]
    fn test_single_day_is_waived() {
        let nothing = ElapsedDuration::new(0, 0);
        assert_eq!(BillingPolicy::new(false).round(ElapsedDuration::new(0, 1)), nothing);
        assert_eq!(BillingPolicy::new(true).round(ElapsedDuration::new(0, 1)), nothing);
        assert_eq!(BillingPolicy::default().round(nothing), nothing);
    }

    #[test]
    fn test_half_month_bucket() {
        let policy = BillingPolicy::default();
        assert_eq!(policy.round(ElapsedDuration::new(3, 1)), ElapsedDuration::new(3, 15));
        assert_eq!(policy.round(ElapsedDuration::new(3, 9)), ElapsedDuration::new(3, 15));
        assert_eq!(policy.round(ElapsedDuration::new(3, 15)), ElapsedDuration::new(3, 15));
    }

    #[test]
    fn test_round_up_past_half_month() {
        let policy = BillingPolicy::default();
        assert_eq!(policy.round(ElapsedDuration::new(3, 16)), ElapsedDuration::new(4, 0));
        assert_eq!(policy.round(ElapsedDuration::new(11, 31)), ElapsedDuration::new(12, 0));
    }

    #[test]
    fn test_whole_months_unchanged() {
        let five = ElapsedDuration::new(5, 0);
        assert_eq!(BillingPolicy::default().round(five), five);
    }

    #[test]
    fn test_grace_day_falls_through_and_is_waived() {
        let grace = BillingPolicy::new(true);
        assert_eq!(grace.days_threshold(), 2);
        assert_eq!(grace.round(ElapsedDuration::new(2, 1)), ElapsedDuration::new(2, 0));
        assert_eq!(grace.round(ElapsedDuration::new(2, 2)), ElapsedDuration::new(2, 15));
    }

    #[test]
    fn test_rounded_between_dates() {
        let start = date(2025, 1, 1);
        let end = date(2025, 2, 5);
        assert_eq!(rounded_elapsed_months_and_days(start, end, false), ElapsedDuration::new(1, 15));

        // exactly one month plus the inclusive end day
        let start = date(2025, 1, 10);
        let end = date(2025, 2, 10);
        assert_eq!(rounded_elapsed_months_and_days(start, end, false), ElapsedDuration::new(1, 15));
        assert_eq!(rounded_elapsed_months_and_days(start, end, true), ElapsedDuration::new(1, 0));

        let same = date(2025, 6, 1);
        assert_eq!(rounded_elapsed_months_and_days(same, same, false), ElapsedDuration::new(0, 0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn no_short_remainders_without_grace(months in 1u32..600, days in 0u32..=31) {
                let rounded = BillingPolicy::new(false).round(ElapsedDuration::new(months, days));
                prop_assert!(rounded.days == 0 || rounded.days == HALF_MONTH_DAYS);
                prop_assert!(!(1..HALF_MONTH_DAYS).contains(&rounded.days));
            }

            #[test]
            fn rounding_never_loses_months(
                months in 0u32..600,
                days in 0u32..=31,
                grace in any::<bool>(),
            ) {
                let rounded = BillingPolicy::new(grace).round(ElapsedDuration::new(months, days));
                prop_assert!(rounded.total_months >= months);
                prop_assert!(rounded.total_months <= months + 1);
            }
        }
    }
}
