//! Numeric value generators.

use rand::Rng;
use rust_decimal::Decimal;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.gen_range(min..=max)
}

/// Generate a random real in the given range (inclusive), rounded to 2 decimals.
///
/// The result always carries scale 2 (`3.50`, not `3.5`).
pub fn generate_hundredths_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Decimal {
    let value = rng.gen_range(min..=max);
    Decimal::new((value * 100.0).round() as i64, 2)
}
