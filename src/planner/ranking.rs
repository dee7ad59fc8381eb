use crate::models::CandidatePlan;

/// Stable ascending sort by diff, truncated to `top_n`.
///
/// Equal diffs keep their input order, so candidates merged from several
/// engines rank in the order the caller supplied them.
pub fn rank(mut plans: Vec<CandidatePlan>, top_n: usize) -> Vec<CandidatePlan> {
    plans.sort_by(|a, b| a.diff.total_cmp(&b.diff));
    plans.truncate(top_n);
    plans
}
