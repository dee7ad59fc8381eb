pub mod prompts;
pub mod render;

pub use prompts::{prompt_target_goals, prompt_yes_no};
pub use render::{display_catalog, display_plan, display_ranked, display_skipped};
