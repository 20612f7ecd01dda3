//! Generation parameters.
//!
//! Everything the pipeline needs is carried explicitly here, including
//! `today`: the temporal horizon is injected, never read from the wall
//! clock inside a generator, so seeded runs reproduce bit-for-bit.

use crate::error::GenResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed fee for the very first payment of every client:
/// 10k XOF installation fee + 15k XOF first month.
pub const INITIAL_PAYMENT_AMOUNT: i64 = 25_000;

/// Monthly price identifying the base subscription tier in the catalog.
pub const BASE_PLAN_PRICE: i64 = 15_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceArea {
    pub latitude: f64,
    pub longitude: f64,
    /// Uniform jitter bound, in degrees, applied to both axes.
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub target_agents: usize,
    pub target_technicians: usize,
    pub target_clients: usize,
    pub start_date: NaiveDate,
    /// Upper bound of the simulated timeline. Dates past
    /// `today + 30 days` are never generated.
    pub today: NaiveDate,
    pub service_area: ServiceArea,
    pub box_models: Vec<String>,
    pub base_plan_price: i64,
    pub initial_payment_amount: i64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            target_agents: 123,
            target_technicians: 86,
            target_clients: 5_729,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            today: chrono::Local::now().date_naive(),
            // Cotonou, Benin.
            service_area: ServiceArea {
                latitude: 6.3700,
                longitude: 2.4324,
                radius: 0.1,
            },
            box_models: vec![
                "Huawei HG8245H".into(),
                "ZTE F609".into(),
                "Nokia G-240W-A".into(),
                "TP-Link Archer C5400".into(),
                "D-Link DIR-882".into(),
            ],
            base_plan_price: BASE_PLAN_PRICE,
            initial_payment_amount: INITIAL_PAYMENT_AMOUNT,
        }
    }
}

impl GenConfig {
    /// Load overrides from a JSON file; absent fields keep defaults.
    pub fn load(path: &Path) -> GenResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {e}", path.display()))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: GenConfig = serde_json::from_str(r#"{"target_clients": 100}"#).unwrap();
        assert_eq!(cfg.target_clients, 100);
        assert_eq!(cfg.target_agents, 123);
        assert_eq!(cfg.base_plan_price, BASE_PLAN_PRICE);
        assert_eq!(cfg.box_models.len(), 5);
    }
}
