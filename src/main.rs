use std::path::Path;
use std::time::{Duration, Instant};

use clap::Parser;

use macro_meal_planner_rs::catalog::{
    self, Catalog, CatalogReport,
};
use macro_meal_planner_rs::cli::{Cli, Command, PlanArgs};
use macro_meal_planner_rs::error::{PlannerError, Result};
use macro_meal_planner_rs::interface::{
    display_catalog, display_plan, display_ranked, display_skipped, prompt_target_goals,
};
use macro_meal_planner_rs::models::Macros;
use macro_meal_planner_rs::planner::{self, SearchConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let report = load_catalog(&cli)?;

    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(&report, &args),
        Command::Catalog => {
            display_catalog(&report.catalog);
            display_skipped(&report.skipped);
            Ok(())
        }
    }
}

/// Build the catalog from whichever source the flags select.
fn load_catalog(cli: &Cli) -> Result<CatalogReport> {
    if let Some(csv_path) = &cli.csv {
        let (items, skipped) = catalog::load_catalog_csv(csv_path)?;
        return Ok(CatalogReport {
            catalog: Catalog::from_items(items),
            skipped,
        });
    }

    let db_path = Path::new(&cli.nutrition);
    if !db_path.exists() {
        return Err(PlannerError::InvalidInput(format!(
            "nutrition database not found: {}",
            cli.nutrition
        )));
    }
    let database = catalog::load_nutrition_db(db_path)?;

    match &cli.menu {
        Some(menu_path) => {
            let menu = catalog::load_menu(menu_path)?;
            Ok(Catalog::from_menu(&database, &menu))
        }
        None => Ok(Catalog::from_database(&database)),
    }
}

fn cmd_plan(report: &CatalogReport, args: &PlanArgs) -> Result<()> {
    display_skipped(&report.skipped);

    let catalog = &report.catalog;
    if catalog.is_empty() {
        println!("Catalog is empty; nothing to plan.");
        return Ok(());
    }
    println!("{} items available for planning", catalog.len());

    let target = target_goals(args)?;

    let config = SearchConfig {
        max_items: args.max_items,
        deadline: args
            .timeout_secs
            .map(|s| Instant::now() + Duration::from_secs(s)),
    };

    let mut plans = planner::ranked_plans(catalog, &target, &config, args.top);

    if args.exact || args.merge {
        match planner::solve(catalog, &target, None) {
            Ok(exact_plan) => {
                if args.merge {
                    plans.push(exact_plan);
                    plans = planner::rank(plans, args.top);
                } else {
                    println!();
                    println!("=== Exact optimizer (full catalog, no item cap) ===");
                    display_plan(&exact_plan, &target);
                }
            }
            Err(PlannerError::SolverNonOptimal(msg)) => {
                // Recoverable: keep the search engine's results.
                eprintln!("Exact optimizer gave no optimal solution ({}), using search results only.", msg);
            }
            Err(e) => return Err(e),
        }
    }

    display_ranked(&plans, &target);
    Ok(())
}

/// Target from flags when any is set, otherwise interactive prompts.
fn target_goals(args: &PlanArgs) -> Result<Macros> {
    let any_flag = args.calories.is_some()
        || args.fats.is_some()
        || args.carbs.is_some()
        || args.protein.is_some();

    if any_flag {
        let target = Macros::new(
            args.calories.unwrap_or(0.0),
            args.fats.unwrap_or(0.0),
            args.carbs.unwrap_or(0.0),
            args.protein.unwrap_or(0.0),
        );
        if !target.is_valid() {
            return Err(PlannerError::InvalidInput(
                "target values must be non-negative".to_string(),
            ));
        }
        return Ok(target);
    }

    prompt_target_goals()
}
