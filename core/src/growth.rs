//! Demand growth model.
//!
//! Converts the generation start date and a target date into a demand
//! multiplier: 10%/month linear growth, a doubled "peak window" running
//! from the 25th of a month into the first days of the next, and
//! uniform monthly noise. Stochastic per call; never memoize the
//! result, so each entity generator sees independent noise for the
//! same month.

use crate::rng::GeneratorRng;
use chrono::{Datelike, NaiveDate};

/// Multiplicative noise band applied to every monthly demand figure.
const NOISE_LOW: f64 = 0.7;
const NOISE_HIGH: f64 = 1.5;

/// Floor on the final multiplier. There is no ceiling.
const MULTIPLIER_FLOOR: f64 = 0.5;

/// Demand multiplier for `target`, relative to `base`.
/// Callers must not pass a `target` before `base`; the linear term
/// would go negative.
pub fn demand_multiplier(rng: &mut GeneratorRng, base: NaiveDate, target: NaiveDate) -> f64 {
    let months_diff =
        (target.year() - base.year()) * 12 + (target.month() as i32 - base.month() as i32);

    let mut growth = 1.0 + 0.1 * months_diff as f64;

    if in_peak_window(base, target) {
        growth *= 2.0;
    }

    growth *= rng.uniform(NOISE_LOW, NOISE_HIGH);

    growth.max(MULTIPLIER_FLOOR)
}

/// End-of-month rush: the 25th onward, plus the first 8 days of the
/// calendar month that follows the base month (December wraps to
/// January).
fn in_peak_window(base: NaiveDate, target: NaiveDate) -> bool {
    if target.day() >= 25 {
        return true;
    }
    if target.day() <= 8 && target > base {
        let successor = base.month() % 12 + 1;
        return target.month() == successor;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn peak_window_covers_month_boundary() {
        let base = d(2024, 1, 1);
        assert!(in_peak_window(base, d(2024, 1, 25)));
        assert!(in_peak_window(base, d(2024, 1, 31)));
        assert!(in_peak_window(base, d(2024, 2, 8)));
        assert!(!in_peak_window(base, d(2024, 2, 9)));
        assert!(!in_peak_window(base, d(2024, 1, 15)));
    }

    #[test]
    fn peak_window_wraps_december_to_january() {
        let base = d(2023, 12, 1);
        assert!(in_peak_window(base, d(2024, 1, 3)));
        assert!(!in_peak_window(base, d(2024, 2, 3)));
    }

    #[test]
    fn early_days_of_base_month_are_not_peak() {
        // target.day <= 8 but target is not after base.
        let base = d(2024, 3, 10);
        assert!(!in_peak_window(base, d(2024, 3, 5)));
    }
}
