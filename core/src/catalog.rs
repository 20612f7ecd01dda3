//! Subscription plan catalog.
//!
//! The catalog is loaded once per run (from the store, or built
//! directly in tests) and passed explicitly to the lifecycle and
//! payment generators. No ad-hoc price lookups mid-generation.

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub label: String,
    /// Integer XOF per month.
    pub monthly_price: i64,
}

#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    pub fn new(plans: Vec<Plan>) -> GenResult<Self> {
        if plans.is_empty() {
            return Err(GenError::EmptyCatalog);
        }
        Ok(Self { plans })
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// The base tier: matched by price, not by name or position.
    pub fn base_plan(&self, base_price: i64) -> GenResult<&Plan> {
        self.plans
            .iter()
            .find(|p| p.monthly_price == base_price)
            .ok_or(GenError::MissingBasePlan {
                expected_price: base_price,
            })
    }

    /// First catalog entry whose id differs from the base plan.
    /// None when the catalog only carries the base tier.
    pub fn alternate_plan(&self, base: &Plan) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id != base.id)
    }

    pub fn price_of(&self, plan_id: i64) -> Option<i64> {
        self.plans
            .iter()
            .find(|p| p.id == plan_id)
            .map(|p| p.monthly_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PlanCatalog {
        PlanCatalog::new(vec![
            Plan {
                id: 1,
                label: "Start 50 Mbps".into(),
                monthly_price: 15_000,
            },
            Plan {
                id: 2,
                label: "Max 200 Mbps".into(),
                monthly_price: 30_000,
            },
        ])
        .unwrap()
    }

    #[test]
    fn base_plan_is_matched_by_price() {
        let cat = catalog();
        assert_eq!(cat.base_plan(15_000).unwrap().id, 1);
        assert!(matches!(
            cat.base_plan(12_000),
            Err(GenError::MissingBasePlan { expected_price: 12_000 })
        ));
    }

    #[test]
    fn alternate_skips_the_base_id() {
        let cat = catalog();
        let base = cat.base_plan(15_000).unwrap().clone();
        assert_eq!(cat.alternate_plan(&base).unwrap().id, 2);
    }

    #[test]
    fn empty_catalog_is_refused() {
        assert!(matches!(PlanCatalog::new(vec![]), Err(GenError::EmptyCatalog)));
    }
}
