pub mod food;
pub mod macros;
pub mod plan;

pub use food::FoodItem;
pub use macros::{Macros, MACRO_FIELDS};
pub use plan::CandidatePlan;
