//! The in-memory result of one generation run.
//!
//! Generators append to the batch in dependency order; the store
//! writes the whole thing in a single transaction afterwards. Nothing
//! is persisted mid-generation.

use crate::records::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct GenerationBatch {
    pub agents: Vec<AgentRecord>,
    pub technicians: Vec<TechnicianRecord>,
    pub clients: Vec<ClientRecord>,
    pub submissions: Vec<SubmissionRecord>,
    pub installations: Vec<InstallationRecord>,
    pub crew_assignments: Vec<CrewAssignment>,
    pub boxes: Vec<BoxRecord>,
    pub subscriptions: Vec<SubscriptionRecord>,
    pub payments: Vec<PaymentRecord>,
    pub feedback: Vec<FeedbackRecord>,
    pub stats: RunStats,
}

/// Degraded-path and volume counters, surfaced at the end of every run.
/// A nonzero degraded counter is expected behavior under sparse inputs,
/// but it must never pass unreported.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// E-mails accepted as duplicates after the retry budget ran out.
    pub duplicate_emails_accepted: u64,
    /// Box serials accepted as duplicates after the retry budget ran out.
    pub duplicate_serials_accepted: u64,
    /// Clients dropped because no agent existed on their creation day.
    pub clients_skipped_no_agent: u64,
    /// Crews completed with one non-eligible technician.
    pub crew_fallback_partial: u64,
    /// Crews drawn entirely from the ineligible pool.
    pub crew_fallback_none_eligible: u64,
    /// Subscription chains cut short by the today+30d temporal bound.
    pub renewals_cut_by_horizon: u64,
}

impl GenerationBatch {
    /// End-of-run summary lines, one per entity kind.
    pub fn log_summary(&self) {
        log::info!("generated {} agents", self.agents.len());
        log::info!("generated {} technicians", self.technicians.len());
        log::info!("generated {} clients", self.clients.len());
        log::info!(
            "generated {} installations ({} completed) with {} crew assignments",
            self.installations.len(),
            self.installations.iter().filter(|i| i.completed_on.is_some()).count(),
            self.crew_assignments.len()
        );
        log::info!("generated {} boxes", self.boxes.len());
        log::info!("generated {} subscriptions", self.subscriptions.len());
        log::info!("generated {} payments", self.payments.len());
        log::info!("generated {} feedback entries", self.feedback.len());

        let s = &self.stats;
        if s.duplicate_emails_accepted > 0 {
            log::warn!("{} duplicate e-mails accepted after retry budget", s.duplicate_emails_accepted);
        }
        if s.duplicate_serials_accepted > 0 {
            log::warn!("{} duplicate serials accepted after retry budget", s.duplicate_serials_accepted);
        }
        if s.clients_skipped_no_agent > 0 {
            log::warn!("{} clients skipped: no eligible agent on their day", s.clients_skipped_no_agent);
        }
        if s.crew_fallback_partial > 0 || s.crew_fallback_none_eligible > 0 {
            log::warn!(
                "crew eligibility fallbacks: {} partial, {} none eligible",
                s.crew_fallback_partial,
                s.crew_fallback_none_eligible
            );
        }
    }
}
