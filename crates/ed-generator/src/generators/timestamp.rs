//! Arrival timestamp generator.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

/// Generate an arrival time: midnight of `base_date` plus a random day in
/// `0..=window_days`, hour in `0..=23` and minute in `0..=59`.
///
/// Seconds are always zero.
pub fn generate_arrival<R: Rng>(
    rng: &mut R,
    base_date: NaiveDate,
    window_days: u32,
) -> NaiveDateTime {
    let days = rng.gen_range(0..=window_days);
    let hours = rng.gen_range(0..=23);
    let minutes = rng.gen_range(0..=59);

    NaiveDateTime::new(base_date, NaiveTime::MIN)
        + Duration::days(i64::from(days))
        + Duration::hours(hours)
        + Duration::minutes(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
    }

    #[test]
    fn test_arrival_within_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = base().and_hms_opt(0, 0, 0).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 11, 19)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();

        for _ in 0..1000 {
            let arrival = generate_arrival(&mut rng, base(), 18);
            assert!(arrival >= start && arrival <= end, "{arrival} outside window");
            assert_eq!(arrival.second(), 0);
        }
    }

    #[test]
    fn test_zero_day_window() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            assert_eq!(generate_arrival(&mut rng, base(), 0).date(), base());
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_arrival(&mut rng1, base(), 18),
            generate_arrival(&mut rng2, base(), 18)
        );
    }
}
