use clap::{Args, Parser, Subcommand};

/// MacroMealPlanner — picks the menu item combination closest to your macro targets.
#[derive(Parser, Debug)]
#[command(name = "macro_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the nutrition database JSON file.
    #[arg(short, long, default_value = "nutrition_data.json")]
    pub nutrition: String,

    /// Optional scraped menu JSON; when given, the catalog is the menu
    /// intersected with the nutrition database.
    #[arg(short, long)]
    pub menu: Option<String>,

    /// Optional flat CSV catalog (name,calories,fats,carbs,protein);
    /// overrides the JSON sources.
    #[arg(long)]
    pub csv: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate meal plans matching a macro target.
    Plan(PlanArgs),

    /// Show the loaded catalog and any skipped entries.
    Catalog,
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Maximum number of items per plan for the combination search.
    #[arg(long, default_value_t = crate::planner::DEFAULT_MAX_ITEMS)]
    pub max_items: usize,

    /// How many ranked plans to show.
    #[arg(long, default_value_t = crate::planner::DEFAULT_TOP_N)]
    pub top: usize,

    /// Target calories. Prompted for interactively when no target flag is set.
    #[arg(long)]
    pub calories: Option<f64>,

    /// Target fats in grams.
    #[arg(long)]
    pub fats: Option<f64>,

    /// Target carbs in grams.
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Target protein in grams.
    #[arg(long)]
    pub protein: Option<f64>,

    /// Also run the exact integer optimizer over the full catalog (no item
    /// cap) and show its plan.
    #[arg(long)]
    pub exact: bool,

    /// Merge the exact optimizer's plan into the search ranking.
    #[arg(long)]
    pub merge: bool,

    /// Give up on deeper search strata after this many seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs {
            max_items: crate::planner::DEFAULT_MAX_ITEMS,
            top: crate::planner::DEFAULT_TOP_N,
            ..PlanArgs::default()
        })
    }
}
