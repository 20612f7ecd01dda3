//! Subscription lifecycle generation, the heart of the dataset.
//!
//! Per client with a completed installation:
//!   1. An initial one-month subscription on the base tier, starting
//!      the day the installation completed.
//!   2. A chain of up to twelve probabilistic renewals. Continuation
//!      odds start at 95%, stay at 90% for the first three cycles,
//!      then drop to 70%; churn climbs after the third cycle.
//!   3. With 15% probability a lapsed chain returns after a 1-6 month
//!      pause (the "win-back" subscription).
//!
//! Every subscription references the client's single installation;
//! a client has one installation but many subscription periods over it.
//! The chain never reaches past `today + 30 days`.

use crate::batch::RunStats;
use crate::catalog::{Plan, PlanCatalog};
use crate::config::GenConfig;
use crate::error::GenResult;
use crate::records::{ClientRecord, InstallationRecord, SubmissionRecord, SubscriptionRecord};
use crate::rng::GeneratorRng;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use uuid::Uuid;

const MAX_RENEWALS: usize = 12;
const DAYS_PER_MONTH: u64 = 30;

/// How far past `today` a renewal may still be booked.
const HORIZON_DAYS: u64 = 30;

pub fn generate_subscriptions(
    cfg: &GenConfig,
    clients: &[ClientRecord],
    submissions: &[SubmissionRecord],
    installations: &[InstallationRecord],
    catalog: &PlanCatalog,
    rng: &mut GeneratorRng,
    stats: &mut RunStats,
) -> GenResult<Vec<SubscriptionRecord>> {
    let base = catalog.base_plan(cfg.base_plan_price)?;
    let alternate = match catalog.alternate_plan(base) {
        Some(p) => p,
        None => {
            log::warn!("catalog has no alternate tier, upsells fall back to the base plan");
            base
        }
    };

    let submission_by_client: HashMap<Uuid, &SubmissionRecord> =
        submissions.iter().map(|s| (s.client_id, s)).collect();
    let installation_by_submission: HashMap<Uuid, &InstallationRecord> =
        installations.iter().map(|i| (i.submission_id, i)).collect();

    let horizon = cfg.today + Days::new(HORIZON_DAYS);
    let mut subscriptions = Vec::new();

    for client in clients {
        let Some(submission) = submission_by_client.get(&client.id) else {
            continue;
        };
        let Some(installation) = installation_by_submission.get(&submission.id) else {
            continue;
        };
        let Some(completed_on) = installation.completed_on else {
            continue;
        };

        chain_for_client(
            client.id,
            installation.id,
            completed_on,
            base,
            alternate,
            horizon,
            rng,
            stats,
            &mut subscriptions,
        );
    }

    log::info!("generated {} subscriptions", subscriptions.len());
    Ok(subscriptions)
}

#[allow(clippy::too_many_arguments)]
fn chain_for_client(
    client_id: Uuid,
    installation_id: Uuid,
    completed_on: NaiveDate,
    base: &Plan,
    alternate: &Plan,
    horizon: NaiveDate,
    rng: &mut GeneratorRng,
    stats: &mut RunStats,
    out: &mut Vec<SubscriptionRecord>,
) {
    // Initial subscription: always the base tier for one month.
    let initial = subscription(rng, client_id, installation_id, base.id, completed_on, 1);
    let mut chain_end = initial.ends_on;
    out.push(initial);

    let mut renewal_count = 0;
    let mut continues = rng.chance(0.95);

    while continues && renewal_count < MAX_RENEWALS {
        // The renewal lands on the chain end; the delay models when the
        // client pays, and only bounds the chain temporally.
        let delay_days = if rng.chance(0.8) {
            rng.in_range(0, 2) // immediate renewal
        } else {
            rng.in_range(3, 10) // late renewal
        };
        let prospective_payment = chain_end + Days::new(delay_days as u64);
        if prospective_payment > horizon {
            stats.renewals_cut_by_horizon += 1;
            break;
        }

        let plan = if rng.chance(0.8) { base } else { alternate };
        let duration = pick_renewal_duration(rng);

        let renewal = subscription(rng, client_id, installation_id, plan.id, chain_end, duration);
        chain_end = renewal.ends_on;
        out.push(renewal);
        renewal_count += 1;

        continues = if renewal_count >= 3 {
            rng.chance(0.7)
        } else {
            rng.chance(0.9)
        };
    }

    // Win-back: some lapsed clients come back after a pause.
    if renewal_count > 0 && rng.chance(0.15) {
        let pause_months = rng.in_range(1, 6) as u64;
        let comeback = chain_end + Days::new(pause_months * DAYS_PER_MONTH);
        if comeback <= horizon {
            let plan = if rng.chance(0.9) { base } else { alternate };
            let duration = if rng.chance(0.8) {
                1
            } else if rng.chance(0.5) {
                3
            } else {
                6
            };
            out.push(subscription(rng, client_id, installation_id, plan.id, comeback, duration));
        }
    }
}

/// One draw: 70% one month, 20% three, 10% six or twelve.
fn pick_renewal_duration(rng: &mut GeneratorRng) -> u32 {
    let roll = rng.next_f64();
    if roll < 0.7 {
        1
    } else if roll < 0.9 {
        3
    } else if rng.chance(0.5) {
        6
    } else {
        12
    }
}

fn subscription(
    rng: &mut GeneratorRng,
    client_id: Uuid,
    installation_id: Uuid,
    plan_id: i64,
    starts_on: NaiveDate,
    duration_months: u32,
) -> SubscriptionRecord {
    SubscriptionRecord {
        id: rng.uuid(),
        client_id,
        plan_id,
        installation_id,
        starts_on,
        ends_on: starts_on + Days::new(DAYS_PER_MONTH * duration_months as u64),
        duration_months,
    }
}
