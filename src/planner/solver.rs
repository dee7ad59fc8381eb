use good_lp::{constraint, microlp, variable, variables, Expression, Solution, SolverModel, Variable};

use crate::catalog::Catalog;
use crate::error::{PlannerError, Result};
use crate::models::{CandidatePlan, FoodItem, Macros, MACRO_FIELDS};

/// Threshold for reading a binary selection variable as chosen.
const SELECTION_TOLERANCE: f64 = 0.5;

/// Find the catalog subset closest to the target by exact integer
/// optimization, without enumerating subsets.
///
/// One binary variable per item; per macro field the signed deviation from
/// the target splits into non-negative `over`/`under` slacks, and the
/// objective minimizes their sum. At optimality at most one slack per field
/// is non-zero, so the objective equals the true L1 deviation.
///
/// `max_items`, when given, caps how many items may be selected; no current
/// caller passes it.
///
/// The returned plan may be empty: the empty selection is always feasible
/// and can be optimal for a near-zero target. A non-optimal solver status
/// maps to [`PlannerError::SolverNonOptimal`], which is recoverable; callers
/// fall back to the combination search.
pub fn solve(catalog: &Catalog, target: &Macros, max_items: Option<usize>) -> Result<CandidatePlan> {
    if catalog.is_empty() {
        return Ok(CandidatePlan::from_items(Vec::new(), target));
    }

    let mut vars = variables!();
    let select: Vec<Variable> = catalog
        .items()
        .iter()
        .map(|_| vars.add(variable().binary()))
        .collect();
    let over: Vec<Variable> = (0..MACRO_FIELDS)
        .map(|_| vars.add(variable().min(0.0)))
        .collect();
    let under: Vec<Variable> = (0..MACRO_FIELDS)
        .map(|_| vars.add(variable().min(0.0)))
        .collect();

    let objective: Expression = over
        .iter()
        .chain(under.iter())
        .map(|v| Expression::from(*v))
        .sum();

    let mut model = vars.minimise(objective).using(microlp);

    let target_fields = target.as_array();
    for field in 0..MACRO_FIELDS {
        let selected_total: Expression = select
            .iter()
            .zip(catalog.items())
            .map(|(v, item)| item.macros.as_array()[field] * *v)
            .sum();
        model = model.with(constraint!(
            selected_total - over[field] + under[field] == target_fields[field]
        ));
    }

    if let Some(cap) = max_items {
        let count: Expression = select.iter().map(|v| Expression::from(*v)).sum();
        model = model.with(constraint!(count <= cap as f64));
    }

    let solution = model
        .solve()
        .map_err(|e| PlannerError::SolverNonOptimal(e.to_string()))?;

    let items: Vec<FoodItem> = select
        .iter()
        .zip(catalog.items())
        .filter(|&(v, _)| solution.value(*v) > SELECTION_TOLERANCE)
        .map(|(_, item)| item.clone())
        .collect();

    // Totals and diff come from the selected items, never from the
    // objective value, so solver slack cannot leak into the metric.
    Ok(CandidatePlan::from_items(items, target))
}
