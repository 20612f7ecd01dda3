//! Commercial agent and field technician generation.
//!
//! Both staff kinds follow the same month-by-month hiring curve: the
//! annual target spread over twelve months, scaled by the demand
//! multiplier and a per-kind share factor, with a hard safety cap of
//! twice the target so compounding multipliers cannot run away.

use crate::batch::RunStats;
use crate::calendar::{month_end, month_start, next_month};
use crate::config::GenConfig;
use crate::growth::demand_multiplier;
use crate::identity::{unique_email, Identity};
use crate::records::{AgentRecord, TechnicianRecord};
use crate::rng::GeneratorRng;
use chrono::NaiveDate;
use std::collections::HashSet;

const AGENT_SHARE: f64 = 0.3;
const TECHNICIAN_SHARE: f64 = 0.4;

pub fn generate_agents(
    cfg: &GenConfig,
    rng: &mut GeneratorRng,
    stats: &mut RunStats,
) -> Vec<AgentRecord> {
    let dates = hiring_dates(cfg, rng, cfg.target_agents, AGENT_SHARE);
    let mut used_emails = HashSet::new();
    let agents: Vec<AgentRecord> = dates
        .into_iter()
        .map(|created_at| {
            let first = Identity::first_name(rng);
            let last = Identity::last_name(rng);
            let (email, duplicate) = unique_email(rng, first, last, &mut used_emails);
            if duplicate {
                stats.duplicate_emails_accepted += 1;
                log::warn!("agent e-mail retry budget exhausted, accepting duplicate {email}");
            }
            AgentRecord {
                id: rng.uuid(),
                full_name: format!("{first} {last}"),
                email,
                phone: Identity::phone(rng),
                created_at,
            }
        })
        .collect();
    log::info!("generated {} agents", agents.len());
    agents
}

pub fn generate_technicians(
    cfg: &GenConfig,
    rng: &mut GeneratorRng,
    stats: &mut RunStats,
) -> Vec<TechnicianRecord> {
    let dates = hiring_dates(cfg, rng, cfg.target_technicians, TECHNICIAN_SHARE);
    let mut used_emails = HashSet::new();
    let technicians: Vec<TechnicianRecord> = dates
        .into_iter()
        .map(|created_at| {
            let first = Identity::first_name(rng);
            let last = Identity::last_name(rng);
            let (email, duplicate) = unique_email(rng, first, last, &mut used_emails);
            if duplicate {
                stats.duplicate_emails_accepted += 1;
                log::warn!("technician e-mail retry budget exhausted, accepting duplicate {email}");
            }
            TechnicianRecord {
                id: rng.uuid(),
                full_name: format!("{first} {last}"),
                email,
                phone: Identity::phone(rng),
                created_at,
            }
        })
        .collect();
    log::info!("generated {} technicians", technicians.len());
    technicians
}

/// Creation dates for one staff kind, month by month from the start
/// date through today. Dates land on a uniformly random day of each
/// month; the overall count is capped at 2 x target.
fn hiring_dates(
    cfg: &GenConfig,
    rng: &mut GeneratorRng,
    target: usize,
    share: f64,
) -> Vec<NaiveDate> {
    let cap = target * 2;
    let mut dates = Vec::new();
    let mut current = cfg.start_date;

    while current <= cfg.today {
        let multiplier = demand_multiplier(rng, cfg.start_date, current);
        let this_month = ((target as f64 / 12.0) * multiplier * share).floor() as usize;
        let this_month = this_month.max(1);

        let first = month_start(current);
        let last = month_end(current);
        let span = (last - first).num_days();

        for _ in 0..this_month {
            if dates.len() >= cap {
                break;
            }
            let offset = rng.in_range(0, span);
            dates.push(first + chrono::Days::new(offset as u64));
        }

        current = next_month(current);
    }
    dates
}
