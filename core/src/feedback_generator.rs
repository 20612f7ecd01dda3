//! Post-installation satisfaction surveys.
//!
//! 80% of completed installations receive one feedback entry, filed
//! 1-3 business days after completion. Scores are normally distributed
//! (product: mean 4.2, crew: mean 4.5), rounded and clamped to [1, 5].
//! The owning client is resolved in memory through the
//! installation -> submission -> client chain before anything is
//! written; the sink never has to look rows up mid-transaction.

use crate::calendar::add_business_days;
use crate::identity::Identity;
use crate::records::{FeedbackRecord, InstallationRecord, SubmissionRecord};
use crate::rng::GeneratorRng;
use std::collections::HashMap;
use uuid::Uuid;

const FEEDBACK_PROBABILITY: f64 = 0.8;
const COMMENT_PROBABILITY: f64 = 0.7;

pub fn generate_feedback(
    installations: &[InstallationRecord],
    submissions: &[SubmissionRecord],
    rng: &mut GeneratorRng,
) -> Vec<FeedbackRecord> {
    let client_by_submission: HashMap<Uuid, Uuid> =
        submissions.iter().map(|s| (s.id, s.client_id)).collect();

    let mut feedback = Vec::new();

    for installation in installations {
        let Some(completed_on) = installation.completed_on else {
            continue;
        };
        if !rng.chance(FEEDBACK_PROBABILITY) {
            continue;
        }
        let Some(&client_id) = client_by_submission.get(&installation.submission_id) else {
            log::warn!(
                "installation {} has no submission in the batch, feedback dropped",
                installation.id
            );
            continue;
        };

        let submitted_on = add_business_days(completed_on, rng.in_range(1, 3) as u32);

        feedback.push(FeedbackRecord {
            id: rng.uuid(),
            client_id,
            installation_id: installation.id,
            product_score: clamped_score(rng, 4.2, 0.8),
            crew_score: clamped_score(rng, 4.5, 0.7),
            comment: rng
                .chance(COMMENT_PROBABILITY)
                .then(|| Identity::feedback_comment(rng)),
            submitted_on,
        });
    }

    log::info!("generated {} feedback entries", feedback.len());
    feedback
}

/// Normal draw rounded to the nearest integer, clamped to [1, 5].
fn clamped_score(rng: &mut GeneratorRng, mean: f64, std_dev: f64) -> i32 {
    (rng.gauss(mean, std_dev).round() as i32).clamp(1, 5)
}
