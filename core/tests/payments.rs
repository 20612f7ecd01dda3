//! Payment derivation invariants: amounts are functions of the plan
//! and duration, never random.

mod common;

use canalbox_core::config::INITIAL_PAYMENT_AMOUNT;
use canalbox_core::error::GenError;
use canalbox_core::records::{PaymentKind, SubscriptionRecord};
use canalbox_core::validators::validate_payment;
use common::{generate, test_catalog};
use std::collections::HashMap;
use uuid::Uuid;

#[test]
fn every_subscription_yields_exactly_one_payment() {
    let batch = generate(42);
    assert_eq!(batch.payments.len(), batch.subscriptions.len());

    let paid_subscriptions: std::collections::HashSet<Uuid> = batch
        .payments
        .iter()
        .filter_map(|p| p.subscription_id)
        .collect();
    assert_eq!(paid_subscriptions.len(), batch.subscriptions.len());
}

#[test]
fn initial_payments_carry_the_fixed_fee_at_signup() {
    let batch = generate(42);
    let client_created: HashMap<Uuid, _> = batch
        .clients
        .iter()
        .map(|c| (c.id, c.created_at))
        .collect();

    let mut initial_clients = std::collections::HashSet::new();
    for payment in batch.payments.iter().filter(|p| p.kind == PaymentKind::Initial) {
        assert_eq!(payment.amount, INITIAL_PAYMENT_AMOUNT);
        assert_eq!(payment.paid_on, client_created[&payment.client_id]);
        assert!(
            initial_clients.insert(payment.client_id),
            "client {} has two initial payments",
            payment.client_id
        );
    }
}

#[test]
fn renewal_amounts_are_price_times_duration_exactly() {
    let batch = generate(42);
    let catalog = test_catalog();
    let subs: HashMap<Uuid, &SubscriptionRecord> =
        batch.subscriptions.iter().map(|s| (s.id, s)).collect();

    for payment in batch.payments.iter().filter(|p| p.kind == PaymentKind::Renewal) {
        let sub = subs[&payment.subscription_id.unwrap()];
        let price = catalog.price_of(sub.plan_id).unwrap();
        assert_eq!(payment.amount, price * sub.duration_months as i64);
        validate_payment(payment.amount, PaymentKind::Renewal, price, sub.duration_months)
            .unwrap();
    }
}

#[test]
fn renewal_payments_never_predate_service_continuity() {
    let batch = generate(42);
    let subs: HashMap<Uuid, &SubscriptionRecord> =
        batch.subscriptions.iter().map(|s| (s.id, s)).collect();

    let mut by_client: HashMap<Uuid, Vec<&SubscriptionRecord>> = HashMap::new();
    for sub in &batch.subscriptions {
        by_client.entry(sub.client_id).or_default().push(sub);
    }

    for payment in batch.payments.iter().filter(|p| p.kind == PaymentKind::Renewal) {
        let sub = subs[&payment.subscription_id.unwrap()];
        assert!(payment.paid_on <= sub.starts_on);
        assert!((sub.starts_on - payment.paid_on).num_days() <= 2);

        let prior_end = by_client[&sub.client_id]
            .iter()
            .filter(|p| p.ends_on <= sub.starts_on && p.id != sub.id)
            .map(|p| p.ends_on)
            .max();
        if let Some(prior_end) = prior_end {
            assert!(
                payment.paid_on >= prior_end,
                "payment {} on {} predates prior coverage ending {prior_end}",
                payment.id,
                payment.paid_on
            );
        }
    }
}

#[test]
fn validator_refuses_wrong_amounts() {
    let err = validate_payment(20_000, PaymentKind::Initial, 15_000, 1).unwrap_err();
    assert!(matches!(
        err,
        GenError::PaymentAmountMismatch { expected: 25_000, actual: 20_000, .. }
    ));

    let err = validate_payment(40_000, PaymentKind::Renewal, 15_000, 3).unwrap_err();
    assert!(matches!(
        err,
        GenError::PaymentAmountMismatch { expected: 45_000, actual: 40_000, .. }
    ));

    assert_eq!(
        validate_payment(45_000, PaymentKind::Renewal, 15_000, 3).unwrap(),
        45_000
    );
    assert_eq!(
        validate_payment(25_000, PaymentKind::Initial, 0, 0).unwrap(),
        25_000
    );
}
