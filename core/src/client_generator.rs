//! Client acquisition generation.
//!
//! Same month-by-month demand curve as staff, at full share and with a
//! floor of 10 sign-ups per month. Each month's count is spread over
//! random days; a day without any already-hired agent produces no
//! clients (the gap is counted, not silently papered over). Every
//! client gets a random position inside the service area.

use crate::batch::RunStats;
use crate::calendar::{month_end, month_start, next_month};
use crate::config::GenConfig;
use crate::growth::demand_multiplier;
use crate::identity::{unique_email, Identity};
use crate::records::{AgentRecord, ClientRecord};
use crate::rng::GeneratorRng;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

const MONTHLY_FLOOR: usize = 10;

pub fn generate_clients(
    cfg: &GenConfig,
    agents: &[AgentRecord],
    rng: &mut GeneratorRng,
    stats: &mut RunStats,
) -> Vec<ClientRecord> {
    let mut clients = Vec::new();
    let mut used_emails: HashSet<String> = HashSet::new();
    let mut current = cfg.start_date;

    while current <= cfg.today {
        let multiplier = demand_multiplier(rng, cfg.start_date, current);
        let this_month =
            (((cfg.target_clients as f64 / 12.0) * multiplier).floor() as usize).max(MONTHLY_FLOOR);

        let first = month_start(current);
        let last = month_end(current);
        let span = (last - first).num_days();

        // Spread the month's sign-ups over random days. BTreeMap keeps
        // the day iteration order stable across runs.
        let mut daily: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for _ in 0..this_month {
            let day = first + chrono::Days::new(rng.in_range(0, span) as u64);
            *daily.entry(day).or_default() += 1;
        }

        for (day, count) in daily {
            let eligible: Vec<&AgentRecord> =
                agents.iter().filter(|a| a.created_at <= day).collect();
            if eligible.is_empty() {
                stats.clients_skipped_no_agent += count as u64;
                log::warn!("no eligible agent on {day}, skipping {count} clients");
                continue;
            }

            for _ in 0..count {
                let agent = eligible[rng.next_u64_below(eligible.len() as u64) as usize];
                let area = &cfg.service_area;
                let latitude = area.latitude + rng.uniform(-area.radius, area.radius);
                let longitude = area.longitude + rng.uniform(-area.radius, area.radius);

                let first_name = Identity::first_name(rng);
                let last_name = Identity::last_name(rng);
                let (email, duplicate) = unique_email(rng, first_name, last_name, &mut used_emails);
                if duplicate {
                    stats.duplicate_emails_accepted += 1;
                    log::warn!("client e-mail retry budget exhausted, accepting duplicate {email}");
                }

                clients.push(ClientRecord {
                    id: rng.uuid(),
                    agent_id: agent.id,
                    box_serial: None, // filled in by the box generator
                    last_name: last_name.to_string(),
                    first_name: first_name.to_string(),
                    email,
                    phone: Identity::phone(rng),
                    address: Identity::address(rng),
                    latitude,
                    longitude,
                    created_at: day,
                });
            }
        }

        current = next_month(current);
    }

    log::info!("generated {} clients", clients.len());
    clients
}
