use serde::Serialize;

use crate::models::{FoodItem, Macros};

/// A candidate meal plan: a subset of the catalog with its aggregate profile.
///
/// `totals` is always the exact field-wise sum of `items`; `diff` is always
/// the L1 distance between `totals` and the target the plan was scored
/// against. Both are recomputed at construction so they can never drift.
#[derive(Debug, Clone, Serialize)]
pub struct CandidatePlan {
    pub items: Vec<FoodItem>,
    pub totals: Macros,
    pub diff: f64,
}

impl CandidatePlan {
    /// Build a plan from its items, computing totals and diff.
    pub fn from_items(items: Vec<FoodItem>, target: &Macros) -> Self {
        let totals: Macros = items.iter().map(|i| i.macros).sum();
        let diff = totals.l1_distance(target);
        Self { items, totals, diff }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
