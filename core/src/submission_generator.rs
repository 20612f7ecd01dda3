//! Sales submission generation: a pure 1:1 projection from clients.

use crate::records::{ClientRecord, SubmissionRecord};
use crate::rng::GeneratorRng;

pub const SUBMISSION_STATUS: &str = "submitted";

pub fn generate_submissions(
    clients: &[ClientRecord],
    rng: &mut GeneratorRng,
) -> Vec<SubmissionRecord> {
    let submissions: Vec<SubmissionRecord> = clients
        .iter()
        .map(|client| SubmissionRecord {
            id: rng.uuid(),
            client_id: client.id,
            submitted_on: client.created_at,
            status: SUBMISSION_STATUS.to_string(),
        })
        .collect();
    log::info!("generated {} submissions", submissions.len());
    submissions
}
