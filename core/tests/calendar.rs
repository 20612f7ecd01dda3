use canalbox_core::calendar::{
    add_business_days, business_days_between, is_business_day, subtract_business_days,
};
use canalbox_core::rng::{GeneratorSlot, RngBank};
use chrono::{Days, NaiveDate, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn weekdays_are_business_days_weekends_are_not() {
    // 2024-03-04 is a Monday.
    let monday = date(2024, 3, 4);
    for offset in 0..5 {
        assert!(is_business_day(monday + Days::new(offset)));
    }
    assert!(!is_business_day(date(2024, 3, 9))); // Saturday
    assert!(!is_business_day(date(2024, 3, 10))); // Sunday
}

#[test]
fn adding_zero_days_returns_the_input() {
    let saturday = date(2024, 3, 9);
    assert_eq!(add_business_days(saturday, 0), saturday);
    assert_eq!(subtract_business_days(saturday, 0), saturday);
}

#[test]
fn friday_plus_one_lands_on_monday() {
    let friday = date(2024, 3, 8);
    assert_eq!(add_business_days(friday, 1), date(2024, 3, 11));
    assert_eq!(subtract_business_days(date(2024, 3, 11), 1), friday);
}

/// Property (seeded): add then subtract is the identity for any
/// business-day start and n in [0, 30].
#[test]
fn add_and_subtract_round_trip() {
    let mut rng = RngBank::new(20240101).for_generator(GeneratorSlot::Agent);
    let origin = date(2023, 1, 1);

    for _ in 0..500 {
        let mut d = origin + Days::new(rng.in_range(0, 2000) as u64);
        if !is_business_day(d) {
            d = add_business_days(d, 1);
        }
        let n = rng.in_range(0, 30) as u32;

        assert_eq!(
            add_business_days(subtract_business_days(d, n), n),
            d,
            "round trip failed for {d} n={n}"
        );
        assert_eq!(
            subtract_business_days(add_business_days(d, n), n),
            d,
            "reverse round trip failed for {d} n={n}"
        );
    }
}

#[test]
fn between_counts_are_inclusive_and_order_independent() {
    let monday = date(2024, 3, 4);
    let friday = date(2024, 3, 8);
    assert_eq!(business_days_between(monday, friday), 5);
    assert_eq!(business_days_between(friday, monday), 5);

    // A weekend alone holds no business days.
    assert_eq!(business_days_between(date(2024, 3, 9), date(2024, 3, 10)), 0);

    // Same business day counts itself once.
    assert_eq!(business_days_between(monday, monday), 1);

    // A full calendar week spans five.
    assert_eq!(business_days_between(monday, date(2024, 3, 10)), 5);
}

#[test]
fn add_skips_weekends_entirely() {
    // Wednesday + 5 business days crosses one weekend.
    assert_eq!(add_business_days(date(2024, 3, 6), 5), date(2024, 3, 13));
    assert_eq!(
        business_days_between(date(2024, 3, 7), date(2024, 3, 13)),
        5
    );
}
