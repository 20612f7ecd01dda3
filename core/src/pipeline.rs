//! The generation pipeline: one sequential pass over the generators.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Agents
//!   2. Technicians
//!   3. Clients            (requires agents)
//!   4. Submissions        (1:1 from clients)
//!   5. Installations+crew (requires submissions, technicians)
//!   6. Boxes              (back-fills clients)
//!   7. Subscriptions      (requires installations, plan catalog)
//!   8. Payments           (requires subscriptions)
//!   9. Feedback           (requires installations, resolved in memory)
//!
//! RULES:
//!   - Each generator draws from its own RNG slot of the bank.
//!   - Nothing touches the database during generation; the result is
//!     one in-memory batch handed to the store for a single
//!     transactional write.

use crate::batch::GenerationBatch;
use crate::catalog::PlanCatalog;
use crate::config::GenConfig;
use crate::error::GenResult;
use crate::rng::{GeneratorSlot, RngBank};
use crate::{
    box_generator, client_generator, feedback_generator, installation_generator,
    payment_generator, staff_generator, submission_generator, subscription_generator,
};

pub struct GenerationPipeline<'a> {
    config: &'a GenConfig,
    catalog: &'a PlanCatalog,
}

impl<'a> GenerationPipeline<'a> {
    pub fn new(config: &'a GenConfig, catalog: &'a PlanCatalog) -> Self {
        Self { config, catalog }
    }

    /// Run every generator in dependency order and assemble the batch.
    pub fn run(&self, rng_bank: &RngBank) -> GenResult<GenerationBatch> {
        let cfg = self.config;
        let mut batch = GenerationBatch::default();

        let mut rng = rng_bank.for_generator(GeneratorSlot::Agent);
        batch.agents = staff_generator::generate_agents(cfg, &mut rng, &mut batch.stats);

        let mut rng = rng_bank.for_generator(GeneratorSlot::Technician);
        batch.technicians = staff_generator::generate_technicians(cfg, &mut rng, &mut batch.stats);

        let mut rng = rng_bank.for_generator(GeneratorSlot::Client);
        batch.clients =
            client_generator::generate_clients(cfg, &batch.agents, &mut rng, &mut batch.stats);

        let mut rng = rng_bank.for_generator(GeneratorSlot::Submission);
        batch.submissions =
            submission_generator::generate_submissions(&batch.clients, &mut rng);

        let mut rng = rng_bank.for_generator(GeneratorSlot::Installation);
        let (installations, crew) = installation_generator::generate_installations(
            &batch.submissions,
            &batch.technicians,
            &mut rng,
            &mut batch.stats,
        );
        batch.installations = installations;
        batch.crew_assignments = crew;

        let mut rng = rng_bank.for_generator(GeneratorSlot::Box);
        batch.boxes =
            box_generator::generate_boxes(cfg, &mut batch.clients, &mut rng, &mut batch.stats);

        let mut rng = rng_bank.for_generator(GeneratorSlot::Subscription);
        batch.subscriptions = subscription_generator::generate_subscriptions(
            cfg,
            &batch.clients,
            &batch.submissions,
            &batch.installations,
            self.catalog,
            &mut rng,
            &mut batch.stats,
        )?;

        let mut rng = rng_bank.for_generator(GeneratorSlot::Payment);
        batch.payments = payment_generator::generate_payments(
            cfg,
            &batch.clients,
            &batch.subscriptions,
            self.catalog,
            &mut rng,
        )?;

        let mut rng = rng_bank.for_generator(GeneratorSlot::Feedback);
        batch.feedback = feedback_generator::generate_feedback(
            &batch.installations,
            &batch.submissions,
            &mut rng,
        );

        Ok(batch)
    }
}
