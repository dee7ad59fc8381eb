mod builder;
mod source;

pub use builder::{Catalog, CatalogReport, SkippedEntry};
pub use source::{load_catalog_csv, load_menu, load_nutrition_db, MenuDocument, MenuEntry};
