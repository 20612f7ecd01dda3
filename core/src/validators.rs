//! Business-rule validation for externally supplied records.
//!
//! The generators uphold these invariants by construction; this module
//! exists for data arriving from outside a run. Violations are
//! reported and refused, never coerced.

use crate::calendar::{business_days_between, is_business_day};
use crate::config::INITIAL_PAYMENT_AMOUNT;
use crate::error::{GenError, GenResult};
use crate::records::PaymentKind;
use chrono::NaiveDate;

/// An initial payment is the fixed fee; a renewal is exactly
/// plan price x duration. Returns the validated amount.
pub fn validate_payment(
    amount: i64,
    kind: PaymentKind,
    plan_price: i64,
    duration_months: u32,
) -> GenResult<i64> {
    let expected = match kind {
        PaymentKind::Initial => INITIAL_PAYMENT_AMOUNT,
        PaymentKind::Renewal => plan_price * duration_months as i64,
    };
    if amount != expected {
        return Err(GenError::PaymentAmountMismatch {
            kind: kind.as_str().to_string(),
            expected,
            actual: amount,
        });
    }
    Ok(amount)
}

/// A renewal of n months spans exactly 30 * n days. One day of
/// tolerance covers 31-day months in hand-entered data.
pub fn validate_subscription_dates(
    starts_on: NaiveDate,
    ends_on: NaiveDate,
    duration_months: u32,
) -> GenResult<()> {
    let expected_days = 30 * duration_months as i64;
    let actual_days = (ends_on - starts_on).num_days();
    if (actual_days - expected_days).abs() > 1 {
        return Err(GenError::SubscriptionDurationMismatch {
            duration_months,
            expected_days,
            actual_days,
        });
    }
    Ok(())
}

/// Business days strictly after `from`, up to and including `to`.
/// This is the distance `add_business_days` covers, which is what the
/// scheduling windows are written in terms of; the inclusive
/// [`business_days_between`] counts one extra day whenever `from`
/// itself is a business day.
pub fn business_day_gap(from: NaiveDate, to: NaiveDate) -> u32 {
    let inclusive = business_days_between(from, to);
    if is_business_day(from) {
        inclusive.saturating_sub(1)
    } else {
        inclusive
    }
}

/// Planned date must be 2-7 business days after submission; the call,
/// when present, 1-2 business days before the planned date.
pub fn validate_installation_dates(
    submitted_on: NaiveDate,
    planned_on: NaiveDate,
    called_on: Option<NaiveDate>,
) -> GenResult<()> {
    let to_install = business_day_gap(submitted_on, planned_on);
    if !(2..=7).contains(&to_install) {
        return Err(GenError::InstallationWindow {
            label: "planned date",
            min: 2,
            max: 7,
            actual: to_install,
        });
    }
    if let Some(called) = called_on {
        let to_call = business_day_gap(called, planned_on);
        if !(1..=2).contains(&to_call) {
            return Err(GenError::InstallationWindow {
                label: "call date",
                min: 1,
                max: 2,
                actual: to_call,
            });
        }
    }
    Ok(())
}
