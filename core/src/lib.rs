//! canalbox-core: synthetic dataset generation for the Canalbox
//! fiber ISP. Agents, technicians, clients, installations, hardware
//! boxes, subscription lifecycles, payments and feedback, persisted to
//! SQLite in one transactional batch.

pub mod batch;
pub mod box_generator;
pub mod calendar;
pub mod catalog;
pub mod client_generator;
pub mod config;
pub mod error;
pub mod feedback_generator;
pub mod growth;
pub mod identity;
pub mod installation_generator;
pub mod payment_generator;
pub mod pipeline;
pub mod records;
pub mod rng;
pub mod staff_generator;
pub mod store;
pub mod submission_generator;
pub mod subscription_generator;
pub mod validators;
