//! Payment generation. Amounts are strictly derived, never random.
//!
//! The first subscription of every client yields one "initial" payment
//! of the fixed fee, dated at client creation. Each later subscription
//! yields one "renewal" payment of exactly plan price x duration.
//! Payment dates sit 0-2 days before the subscription start but never
//! before the end of the previous subscription: payment cannot
//! predate continuity of service.

use crate::catalog::PlanCatalog;
use crate::config::GenConfig;
use crate::error::{GenError, GenResult};
use crate::records::{ClientRecord, PaymentKind, PaymentRecord, SubscriptionRecord};
use crate::rng::GeneratorRng;
use chrono::Days;
use std::collections::HashMap;
use uuid::Uuid;

pub fn generate_payments(
    cfg: &GenConfig,
    clients: &[ClientRecord],
    subscriptions: &[SubscriptionRecord],
    catalog: &PlanCatalog,
    rng: &mut GeneratorRng,
) -> GenResult<Vec<PaymentRecord>> {
    let mut by_client: HashMap<Uuid, Vec<&SubscriptionRecord>> = HashMap::new();
    for sub in subscriptions {
        by_client.entry(sub.client_id).or_default().push(sub);
    }

    let mut payments = Vec::new();

    for client in clients {
        let Some(subs) = by_client.get_mut(&client.id) else {
            continue;
        };
        subs.sort_by_key(|s| s.starts_on);

        // Initial payment: installation fee + first month, at sign-up.
        payments.push(PaymentRecord {
            id: rng.uuid(),
            client_id: client.id,
            subscription_id: Some(subs[0].id),
            amount: cfg.initial_payment_amount,
            kind: PaymentKind::Initial,
            paid_on: client.created_at,
        });

        for (idx, sub) in subs.iter().enumerate().skip(1) {
            // Corruption guard: refuse to derive a payment from an
            // inverted date range.
            if sub.starts_on > sub.ends_on {
                log::warn!(
                    "subscription {} has start {} after end {}, no payment derived",
                    sub.id,
                    sub.starts_on,
                    sub.ends_on
                );
                continue;
            }

            let price = catalog
                .price_of(sub.plan_id)
                .ok_or(GenError::UnknownPlan { plan_id: sub.plan_id })?;
            let amount = price * sub.duration_months as i64;

            let mut paid_on = sub.starts_on - Days::new(rng.in_range(0, 2) as u64);
            // Floor at the latest prior end date not after this start.
            if let Some(previous_end) = subs[..idx]
                .iter()
                .filter(|p| p.ends_on <= sub.starts_on)
                .map(|p| p.ends_on)
                .max()
            {
                if paid_on < previous_end {
                    paid_on = previous_end;
                }
            }

            payments.push(PaymentRecord {
                id: rng.uuid(),
                client_id: client.id,
                subscription_id: Some(sub.id),
                amount,
                kind: PaymentKind::Renewal,
                paid_on,
            });
        }
    }

    log::info!("generated {} payments", payments.len());
    Ok(payments)
}
