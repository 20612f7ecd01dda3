//! Installation scheduling and crew assignment.
//!
//! Dates work in business days: the visit is planned 2-7 business days
//! after the submission, the confirmation call lands 1-2 business days
//! before the visit, and 95% of visits complete on the planned day;
//! the rest slip exactly one business day.
//!
//! Crews take two technicians hired on or before the submission date.
//! When the eligible pool is too small the assignment degrades:
//! knowingly violating the eligibility rule rather than dropping the
//! installation, and the degradation is counted and logged.

use crate::batch::RunStats;
use crate::calendar::{add_business_days, subtract_business_days};
use crate::records::{CrewAssignment, InstallationRecord, SubmissionRecord, TechnicianRecord};
use crate::rng::GeneratorRng;

const COMPLETION_ON_PLAN_PROBABILITY: f64 = 0.95;
pub const CREW_SIZE: usize = 2;

pub fn generate_installations(
    submissions: &[SubmissionRecord],
    technicians: &[TechnicianRecord],
    rng: &mut GeneratorRng,
    stats: &mut RunStats,
) -> (Vec<InstallationRecord>, Vec<CrewAssignment>) {
    let mut installations = Vec::with_capacity(submissions.len());
    let mut assignments = Vec::with_capacity(submissions.len() * CREW_SIZE);

    for submission in submissions {
        let planned_on = add_business_days(submission.submitted_on, rng.in_range(2, 7) as u32);
        let called_on = subtract_business_days(planned_on, rng.in_range(1, 2) as u32);
        let completed_on = if rng.chance(COMPLETION_ON_PLAN_PROBABILITY) {
            planned_on
        } else {
            add_business_days(planned_on, 1) // one-day slip, never a cancellation
        };

        let installation = InstallationRecord {
            id: rng.uuid(),
            submission_id: submission.id,
            planned_on,
            completed_on: Some(completed_on),
            called_on,
        };

        for technician_id in pick_crew(submission, technicians, rng, stats) {
            assignments.push(CrewAssignment {
                installation_id: installation.id,
                technician_id,
            });
        }
        installations.push(installation);
    }

    log::info!(
        "generated {} installations with {} crew assignments",
        installations.len(),
        assignments.len()
    );
    (installations, assignments)
}

fn pick_crew(
    submission: &SubmissionRecord,
    technicians: &[TechnicianRecord],
    rng: &mut GeneratorRng,
    stats: &mut RunStats,
) -> Vec<uuid::Uuid> {
    let eligible: Vec<&TechnicianRecord> = technicians
        .iter()
        .filter(|t| t.created_at <= submission.submitted_on)
        .collect();

    match eligible.len() {
        n if n >= CREW_SIZE => sample_two(&eligible, rng),
        1 => {
            // Keep the one eligible technician and fill the crew with
            // any other one, eligible or not.
            let kept = eligible[0];
            let others: Vec<&TechnicianRecord> =
                technicians.iter().filter(|t| t.id != kept.id).collect();
            let mut crew = vec![kept.id];
            if let Some(extra) = pick_one(&others, rng) {
                crew.push(extra);
                stats.crew_fallback_partial += 1;
                log::warn!(
                    "only one technician eligible for submission {}, crew completed from full pool",
                    submission.id
                );
            }
            crew
        }
        _ => {
            // Nobody was hired yet on the submission date. Staffing the
            // crew from the full pool violates the eligibility rule; it
            // is a deliberate policy trade-off, surfaced in the stats.
            let all: Vec<&TechnicianRecord> = technicians.iter().collect();
            let crew = if all.len() >= CREW_SIZE {
                sample_two(&all, rng)
            } else {
                all.iter().map(|t| t.id).collect()
            };
            if !crew.is_empty() {
                stats.crew_fallback_none_eligible += 1;
                log::warn!(
                    "no technician eligible for submission {}, crew drawn from full pool",
                    submission.id
                );
            }
            crew
        }
    }
}

/// Two distinct technicians, uniformly.
fn sample_two(pool: &[&TechnicianRecord], rng: &mut GeneratorRng) -> Vec<uuid::Uuid> {
    let first = rng.next_u64_below(pool.len() as u64) as usize;
    let mut second = rng.next_u64_below(pool.len() as u64 - 1) as usize;
    if second >= first {
        second += 1;
    }
    vec![pool[first].id, pool[second].id]
}

fn pick_one(pool: &[&TechnicianRecord], rng: &mut GeneratorRng) -> Option<uuid::Uuid> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.next_u64_below(pool.len() as u64) as usize].id)
}
