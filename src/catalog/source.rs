use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::builder::SkippedEntry;
use crate::error::Result;
use crate::models::{FoodItem, Macros};

/// A scraped daily menu document.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuDocument {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub items: Vec<MenuEntry>,
}

/// One offered item on the menu.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    #[serde(default)]
    pub meal_time: String,
    #[serde(default)]
    pub location: String,
}

impl MenuEntry {
    #[cfg(test)]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            meal_time: String::new(),
            location: String::new(),
        }
    }
}

/// Load the nutrition database: a JSON object keyed by food name.
///
/// The BTreeMap keeps iteration in name order so full-database catalogs are
/// deterministic.
pub fn load_nutrition_db<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, Macros>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a scraped menu document.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<MenuDocument> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a flat CSV catalog: `name,calories,fats,carbs,protein`.
///
/// Rows that fail to parse are skipped and recorded; a bad row never aborts
/// the load.
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<(Vec<FoodItem>, Vec<SkippedEntry>)> {
    #[derive(Deserialize)]
    struct Row {
        name: String,
        calories: f64,
        fats: f64,
        carbs: f64,
        protein: f64,
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();
    let mut skipped = Vec::new();

    for (line, record) in reader.deserialize::<Row>().enumerate() {
        match record {
            Ok(row) => {
                let macros = Macros::new(row.calories, row.fats, row.carbs, row.protein);
                if macros.is_valid() {
                    items.push(FoodItem::new(row.name, macros));
                } else {
                    skipped.push(SkippedEntry {
                        name: row.name,
                        reason: "macro values are negative or non-finite".to_string(),
                    });
                }
            }
            Err(e) => {
                skipped.push(SkippedEntry {
                    name: format!("row {}", line + 2),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok((items, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_nutrition_db() {
        let json = r#"{
            "Apple": {"calories": 100, "fats": 0.5, "carbs": 20, "protein": 1},
            "Rice Bowl": {"calories": "250", "carbs": 50, "protein": 5}
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let db = load_nutrition_db(file.path()).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db["Apple"].carbs, 20.0);
        // String coercion and missing-field default.
        assert_eq!(db["Rice Bowl"].calories, 250.0);
        assert_eq!(db["Rice Bowl"].fats, 0.0);
    }

    #[test]
    fn test_load_menu() {
        let json = r#"{
            "date": "2026-08-30",
            "items": [
                {"name": "Grilled Chicken", "meal_time": "lunch", "location": "Main Hall"},
                {"name": "Apple"}
            ]
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let menu = load_menu(file.path()).unwrap();
        assert_eq!(menu.date, "2026-08-30");
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[0].location, "Main Hall");
        assert_eq!(menu.items[1].meal_time, "");
    }

    #[test]
    fn test_load_catalog_csv_skips_bad_rows() {
        let csv = "name,calories,fats,carbs,protein\n\
                   Apple,100,0.5,20,1\n\
                   Broken,not_a_number,0,0,0\n\
                   Rice,250,2,50,5\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let (items, skipped) = load_catalog_csv(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Apple");
        assert_eq!(items[1].name, "Rice");
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].name.contains("row"));
    }
}
