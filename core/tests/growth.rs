use canalbox_core::growth::demand_multiplier;
use canalbox_core::rng::{GeneratorSlot, RngBank};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn multiplier_stays_in_the_noise_band_off_peak() {
    let mut rng = RngBank::new(1).for_generator(GeneratorSlot::Client);
    let base = date(2024, 1, 1);
    // Six months out, mid-month: growth = 1.6, no peak.
    let target = date(2024, 7, 15);
    for _ in 0..1000 {
        let m = demand_multiplier(&mut rng, base, target);
        assert!(m >= 1.6 * 0.7 - 1e-9, "below noise floor: {m}");
        assert!(m < 1.6 * 1.5 + 1e-9, "above noise ceiling: {m}");
    }
}

#[test]
fn peak_window_doubles_demand() {
    let mut rng = RngBank::new(2).for_generator(GeneratorSlot::Client);
    let base = date(2024, 1, 1);
    // Same month, day 28: growth = 1.0, doubled by the peak.
    let target = date(2024, 1, 28);
    for _ in 0..1000 {
        let m = demand_multiplier(&mut rng, base, target);
        assert!(m >= 2.0 * 0.7 - 1e-9, "peak not applied: {m}");
        assert!(m < 2.0 * 1.5 + 1e-9, "above peak ceiling: {m}");
    }
}

#[test]
fn early_next_month_is_still_peak() {
    let mut rng = RngBank::new(3).for_generator(GeneratorSlot::Client);
    let base = date(2024, 1, 10);
    // February 5th follows January: peak, growth = 1.1 doubled.
    let target = date(2024, 2, 5);
    for _ in 0..1000 {
        let m = demand_multiplier(&mut rng, base, target);
        assert!(m >= 2.2 * 0.7 - 1e-9, "wrap peak not applied: {m}");
    }
}

#[test]
fn multiplier_never_drops_below_the_floor() {
    let mut rng = RngBank::new(4).for_generator(GeneratorSlot::Client);
    let base = date(2024, 1, 1);
    for _ in 0..1000 {
        assert!(demand_multiplier(&mut rng, base, date(2024, 1, 10)) >= 0.5);
    }
}

#[test]
fn multiplier_is_stochastic_per_call() {
    let mut rng = RngBank::new(5).for_generator(GeneratorSlot::Client);
    let base = date(2024, 1, 1);
    let target = date(2024, 6, 15);
    let first = demand_multiplier(&mut rng, base, target);
    let any_different = (0..20).any(|_| demand_multiplier(&mut rng, base, target) != first);
    assert!(any_different, "multiplier looks memoized");
}
