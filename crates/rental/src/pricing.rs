//! Rental pricing.

use chrono::{DateTime, Utc};

/// Milliseconds in one rental day.
pub const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Number of billable days in `[start, end)`.
///
/// Any started day counts as a full day: 24h is one day, 25h is two.
/// Empty or inverted intervals bill zero days.
pub fn rental_days(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let millis = u64::try_from((end - start).num_milliseconds()).unwrap_or(0);
    millis.div_ceil(MILLIS_PER_DAY)
}

/// Price of renting over `[start, end)` at `price_per_day` (smallest currency unit).
pub fn rental_price(price_per_day: u64, start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    price_per_day.saturating_mul(rental_days(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn whole_days_are_billed_exactly() {
        assert_eq!(rental_days(t0(), t0() + Duration::hours(24)), 1);
        assert_eq!(rental_days(t0(), t0() + Duration::hours(48)), 2);
    }

    #[test]
    fn started_days_round_up() {
        assert_eq!(rental_days(t0(), t0() + Duration::hours(25)), 2);
        assert_eq!(rental_days(t0(), t0() + Duration::milliseconds(1)), 1);
        assert_eq!(rental_days(t0(), t0() + Duration::days(2) + Duration::seconds(1)), 3);
    }

    #[test]
    fn price_is_daily_rate_times_billed_days() {
        assert_eq!(rental_price(3000, t0(), t0() + Duration::days(2)), 6000);
        assert_eq!(rental_price(3000, t0(), t0() + Duration::hours(25)), 6000);
        assert_eq!(rental_price(3000, t0(), t0() + Duration::hours(24)), 3000);
    }

    #[test]
    fn inverted_interval_bills_nothing() {
        assert_eq!(rental_days(t0(), t0() - Duration::hours(3)), 0);
    }

    proptest! {
        /// Property: billed days always cover the interval, and never by a full extra day.
        #[test]
        fn billed_days_cover_the_interval(minutes in 1i64..100_000) {
            let end = t0() + Duration::minutes(minutes);
            let days = rental_days(t0(), end) as i64;
            prop_assert!(days * 24 * 60 >= minutes);
            prop_assert!((days - 1) * 24 * 60 < minutes);
        }
    }
}
