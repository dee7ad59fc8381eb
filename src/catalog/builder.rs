use std::collections::{BTreeMap, HashMap, HashSet};

use strsim::jaro_winkler;

use crate::catalog::source::MenuDocument;
use crate::models::{FoodItem, Macros};

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// An ordered, deduplicated, read-only list of selectable foods.
///
/// Built fresh per planning invocation; the planner never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FoodItem>,
}

/// A catalog entry that could not be used, with the reason it was dropped.
#[derive(Debug, Clone)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: String,
}

/// A built catalog plus the entries that were skipped while building it.
///
/// Skips are recorded rather than silently dropped so callers can surface
/// them; a skip never aborts the rest of the build.
#[derive(Debug, Clone, Default)]
pub struct CatalogReport {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedEntry>,
}

impl Catalog {
    /// Build from a list of items, deduplicating case-insensitively by name.
    ///
    /// First occurrence wins and input order is preserved, so the
    /// enumeration order downstream is stable.
    pub fn from_items(items: Vec<FoodItem>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut deduped = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.key()) {
                deduped.push(item);
            }
        }
        Self { items: deduped }
    }

    /// Build from an entire nutrition database, in name order.
    ///
    /// Entries with invalid macro values are skipped and recorded.
    pub fn from_database(database: &BTreeMap<String, Macros>) -> CatalogReport {
        let mut items = Vec::with_capacity(database.len());
        let mut skipped = Vec::new();

        for (name, macros) in database {
            if macros.is_valid() {
                items.push(FoodItem::new(name.clone(), *macros));
            } else {
                skipped.push(SkippedEntry {
                    name: name.clone(),
                    reason: "macro values are negative or non-finite".to_string(),
                });
            }
        }

        CatalogReport {
            catalog: Catalog::from_items(items),
            skipped,
        }
    }

    /// Intersect a scraped menu with the nutrition database.
    ///
    /// Matching is case-insensitive on name; matched items keep the menu's
    /// original name formatting and the menu's order. Unmatched entries are
    /// skipped with a closest-name suggestion where one is plausible.
    pub fn from_menu(database: &BTreeMap<String, Macros>, menu: &MenuDocument) -> CatalogReport {
        let by_key: HashMap<String, &Macros> = database
            .iter()
            .map(|(name, macros)| (name.to_lowercase(), macros))
            .collect();

        let mut items = Vec::with_capacity(menu.items.len());
        let mut skipped = Vec::new();

        for entry in &menu.items {
            let key = entry.name.to_lowercase();
            match by_key.get(&key) {
                Some(macros) if macros.is_valid() => {
                    items.push(FoodItem::new(entry.name.clone(), **macros));
                }
                Some(_) => {
                    skipped.push(SkippedEntry {
                        name: entry.name.clone(),
                        reason: "macro values are negative or non-finite".to_string(),
                    });
                }
                None => {
                    let reason = match closest_name(&key, database) {
                        Some(suggestion) => {
                            format!("not in nutrition database (did you mean '{}'?)", suggestion)
                        }
                        None => "not in nutrition database".to_string(),
                    };
                    skipped.push(SkippedEntry {
                        name: entry.name.clone(),
                        reason,
                    });
                }
            }
        }

        CatalogReport {
            catalog: Catalog::from_items(items),
            skipped,
        }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&FoodItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Best fuzzy match for an unmatched menu name, if any scores high enough.
fn closest_name(key: &str, database: &BTreeMap<String, Macros>) -> Option<String> {
    database
        .keys()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), key)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name.clone())
}
