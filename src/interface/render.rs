use crate::catalog::{Catalog, SkippedEntry};
use crate::models::{CandidatePlan, Macros};

/// Display a single plan with per-item macros, totals, and diff.
pub fn display_plan(plan: &CandidatePlan, target: &Macros) {
    if plan.is_empty() {
        println!("No plan found (empty catalog or zero item budget).");
        return;
    }

    let max_name_len = plan
        .items
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    for (i, item) in plan.items.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>5.0} cal | F:{:>5.1} C:{:>5.1} P:{:>5.1}",
            i + 1,
            item.name,
            item.macros.calories,
            item.macros.fats,
            item.macros.carbs,
            item.macros.protein,
            width = max_name_len
        );
    }

    println!(
        "     {:<width$}   {:>5.0} cal | F:{:>5.1} C:{:>5.1} P:{:>5.1}",
        "totals",
        plan.totals.calories,
        plan.totals.fats,
        plan.totals.carbs,
        plan.totals.protein,
        width = max_name_len
    );
    println!(
        "     target: {:.0} cal, F:{:.1} C:{:.1} P:{:.1} | deviation: {:.2}",
        target.calories, target.fats, target.carbs, target.protein, plan.diff
    );
}

/// Display a ranked list of plans.
pub fn display_ranked(plans: &[CandidatePlan], target: &Macros) {
    if plans.is_empty() {
        println!("No plans found (empty catalog or zero item budget).");
        return;
    }

    println!();
    println!("=== Ranked Plans ===");
    for (i, plan) in plans.iter().enumerate() {
        println!();
        println!("--- #{} (deviation {:.2}) ---", i + 1, plan.diff);
        display_plan(plan, target);
    }
    println!();
}

/// Display the loaded catalog.
pub fn display_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    println!();
    println!("=== Catalog ({} items) ===", catalog.len());
    println!();
    for item in catalog.items() {
        println!(
            "  {} - {:.0} cal, F:{:.1} C:{:.1} P:{:.1}",
            item.name, item.macros.calories, item.macros.fats, item.macros.carbs, item.macros.protein
        );
    }
    println!();
}

/// Display entries skipped during catalog construction.
pub fn display_skipped(skipped: &[SkippedEntry]) {
    if skipped.is_empty() {
        return;
    }

    println!();
    println!("=== Skipped entries ({}) ===", skipped.len());
    for entry in skipped {
        println!("  {} - {}", entry.name, entry.reason);
    }
    println!();
}
