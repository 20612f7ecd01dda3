//! Business-day arithmetic and month iteration helpers.
//!
//! Weekends are Saturday and Sunday; there is no holiday calendar.
//! Scheduling rules (installation windows, feedback delays) all go
//! through these functions so the weekend-skipping behavior is uniform.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Monday through Friday.
pub fn is_business_day(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advance `n` business days. `n == 0` returns the input unchanged,
/// even when the input falls on a weekend.
pub fn add_business_days(start: NaiveDate, n: u32) -> NaiveDate {
    let mut current = start;
    let mut remaining = n;
    while remaining > 0 {
        current = current + Days::new(1);
        if is_business_day(current) {
            remaining -= 1;
        }
    }
    current
}

/// Step backward `n` business days. Symmetric with [`add_business_days`].
pub fn subtract_business_days(start: NaiveDate, n: u32) -> NaiveDate {
    let mut current = start;
    let mut remaining = n;
    while remaining > 0 {
        current = current - Days::new(1);
        if is_business_day(current) {
            remaining -= 1;
        }
    }
    current
}

/// Inclusive count of business days in `[min(a, b), max(a, b)]`.
/// Order-independent.
pub fn business_days_between(a: NaiveDate, b: NaiveDate) -> u32 {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let mut days = 0;
    let mut current = start;
    while current <= end {
        if is_business_day(current) {
            days += 1;
        }
        current = current + Days::new(1);
    }
    days
}

/// First day of the month containing `d`.
pub fn month_start(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap()
}

/// Last day of the month containing `d`.
pub fn month_end(d: NaiveDate) -> NaiveDate {
    let first_of_next = next_month(d);
    first_of_next - Days::new(1)
}

/// First day of the month after the one containing `d`.
/// December wraps to January of the next year.
pub fn next_month(d: NaiveDate) -> NaiveDate {
    if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_end_handles_december() {
        assert_eq!(month_end(d(2024, 12, 5)), d(2024, 12, 31));
        assert_eq!(next_month(d(2024, 12, 5)), d(2025, 1, 1));
    }

    #[test]
    fn month_end_handles_leap_february() {
        assert_eq!(month_end(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(month_end(d(2023, 2, 10)), d(2023, 2, 28));
    }
}
