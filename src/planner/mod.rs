mod combinations;
pub mod ranking;
pub mod search;
pub mod solver;

pub use ranking::rank;
pub use search::{best_plan, ranked_plans, SearchConfig, DEFAULT_MAX_ITEMS, DEFAULT_TOP_N};
pub use solver::solve;
