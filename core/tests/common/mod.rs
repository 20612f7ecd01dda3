#![allow(dead_code)]

use canalbox_core::batch::GenerationBatch;
use canalbox_core::catalog::{Plan, PlanCatalog};
use canalbox_core::config::GenConfig;
use canalbox_core::pipeline::GenerationPipeline;
use canalbox_core::rng::RngBank;
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Small, fixed-horizon configuration: one simulated year of 2024,
/// no dependence on the wall clock.
pub fn test_config() -> GenConfig {
    GenConfig {
        target_agents: 20,
        target_technicians: 15,
        target_clients: 100,
        start_date: date(2024, 1, 1),
        today: date(2024, 12, 31),
        ..GenConfig::default()
    }
}

pub fn test_catalog() -> PlanCatalog {
    PlanCatalog::new(vec![
        Plan {
            id: 1,
            label: "Canalbox Start 50 Mbps".into(),
            monthly_price: 15_000,
        },
        Plan {
            id: 2,
            label: "Canalbox Max 200 Mbps".into(),
            monthly_price: 30_000,
        },
    ])
    .unwrap()
}

pub fn generate(seed: u64) -> GenerationBatch {
    let config = test_config();
    let catalog = test_catalog();
    GenerationPipeline::new(&config, &catalog)
        .run(&RngBank::new(seed))
        .unwrap()
}
