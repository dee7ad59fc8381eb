use dialoguer::{Confirm, Input};

use crate::error::{PlannerError, Result};
use crate::models::Macros;

fn prompt_macro_field(label: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Target {}", label))
        .default("0".to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("{} is not a number: {:?}", label, input)))?;

    if value < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be non-negative",
            label
        )));
    }

    Ok(value)
}

/// Prompt for the four target macro values.
///
/// Empty input defaults to 0; non-numeric input is rejected rather than
/// silently zeroed.
pub fn prompt_target_goals() -> Result<Macros> {
    let calories = prompt_macro_field("calories")?;
    let fats = prompt_macro_field("fats (g)")?;
    let carbs = prompt_macro_field("carbs (g)")?;
    let protein = prompt_macro_field("protein (g)")?;

    Ok(Macros::new(calories, fats, carbs, protein))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
