use serde::{Deserialize, Serialize};

use crate::models::Macros;

/// A selectable food item: a name plus its macro profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    #[serde(flatten)]
    pub macros: Macros,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, macros: Macros) -> Self {
        Self {
            name: name.into(),
            macros,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for FoodItem {}
