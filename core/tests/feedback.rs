//! Post-installation survey invariants.

mod common;

use canalbox_core::calendar::is_business_day;
use canalbox_core::feedback_generator::generate_feedback;
use canalbox_core::records::{InstallationRecord, SubmissionRecord};
use canalbox_core::rng::{GeneratorSlot, RngBank};
use canalbox_core::validators::business_day_gap;
use common::{date, generate};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

#[test]
fn at_most_one_feedback_per_installation() {
    let batch = generate(42);
    let mut seen = HashSet::new();
    for fb in &batch.feedback {
        assert!(
            seen.insert(fb.installation_id),
            "installation {} surveyed twice",
            fb.installation_id
        );
    }
}

#[test]
fn roughly_four_in_five_installations_get_feedback() {
    let batch = generate(42);
    let completed = batch
        .installations
        .iter()
        .filter(|i| i.completed_on.is_some())
        .count();
    let ratio = batch.feedback.len() as f64 / completed as f64;
    assert!(
        (0.65..=0.95).contains(&ratio),
        "feedback ratio {ratio} far from 0.8"
    );
}

#[test]
fn scores_are_clamped_to_the_survey_scale() {
    let batch = generate(42);
    for fb in &batch.feedback {
        assert!((1..=5).contains(&fb.product_score));
        assert!((1..=5).contains(&fb.crew_score));
    }
}

#[test]
fn surveys_arrive_one_to_three_business_days_after_completion() {
    let batch = generate(42);
    let completed: HashMap<Uuid, _> = batch
        .installations
        .iter()
        .filter_map(|i| i.completed_on.map(|d| (i.id, d)))
        .collect();
    for fb in &batch.feedback {
        let gap = business_day_gap(completed[&fb.installation_id], fb.submitted_on);
        assert!(
            (1..=3).contains(&gap),
            "feedback {} filed {gap} business days after completion",
            fb.id
        );
        assert!(is_business_day(fb.submitted_on));
    }
}

#[test]
fn feedback_resolves_the_owning_client_in_memory() {
    let batch = generate(42);
    let submission_client: HashMap<Uuid, Uuid> = batch
        .submissions
        .iter()
        .map(|s| (s.id, s.client_id))
        .collect();
    let installation_submission: HashMap<Uuid, Uuid> = batch
        .installations
        .iter()
        .map(|i| (i.id, i.submission_id))
        .collect();
    for fb in &batch.feedback {
        let expected = submission_client[&installation_submission[&fb.installation_id]];
        assert_eq!(fb.client_id, expected);
    }
}

/// A Friday completion must push the survey past the weekend: one to
/// three business days forward always lands Monday through Wednesday.
#[test]
fn friday_completion_skips_the_weekend() {
    // 2024-03-01 is a Friday.
    let friday = date(2024, 3, 1);
    let mut rng = RngBank::new(77).for_generator(GeneratorSlot::Feedback);

    let mut installations = Vec::new();
    let mut submissions = Vec::new();
    let mut id_rng = RngBank::new(78).for_generator(GeneratorSlot::Feedback);
    for _ in 0..200 {
        let client_id = id_rng.uuid();
        let submission = SubmissionRecord {
            id: id_rng.uuid(),
            client_id,
            submitted_on: date(2024, 2, 26),
            status: "submitted".into(),
        };
        installations.push(InstallationRecord {
            id: id_rng.uuid(),
            submission_id: submission.id,
            planned_on: friday,
            completed_on: Some(friday),
            called_on: date(2024, 2, 28),
        });
        submissions.push(submission);
    }

    let feedback = generate_feedback(&installations, &submissions, &mut rng);
    assert!(!feedback.is_empty());
    for fb in &feedback {
        assert!(is_business_day(fb.submitted_on));
        assert!(
            fb.submitted_on >= date(2024, 3, 4) && fb.submitted_on <= date(2024, 3, 6),
            "expected Monday..Wednesday, got {}",
            fb.submitted_on
        );
    }
}

#[test]
fn comments_are_optional_but_common() {
    let batch = generate(42);
    let with_comment = batch.feedback.iter().filter(|f| f.comment.is_some()).count();
    let ratio = with_comment as f64 / batch.feedback.len() as f64;
    assert!(
        (0.5..=0.9).contains(&ratio),
        "comment ratio {ratio} far from 0.7"
    );
}
