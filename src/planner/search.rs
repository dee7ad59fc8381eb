use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::models::{CandidatePlan, Macros};
use crate::planner::combinations::IndexCombinations;

/// Default subset-size cap; brute force is exponential past small caps.
pub const DEFAULT_MAX_ITEMS: usize = 4;

/// Default number of ranked plans returned.
pub const DEFAULT_TOP_N: usize = 3;

/// Knobs for the combination search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum subset size considered. 0 means no subsets at all.
    pub max_items: usize,

    /// Optional cutoff, checked only between size strata: once a stratum is
    /// started it always completes, and on expiry the best seen so far is
    /// returned.
    pub deadline: Option<Instant>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            deadline: None,
        }
    }
}

impl SearchConfig {
    pub fn with_max_items(max_items: usize) -> Self {
        Self {
            max_items,
            ..Self::default()
        }
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// A scored subset, ordered by `(diff, subset size, indices)`.
///
/// The index vector doubles as the subset's enumeration rank: subsets are
/// visited smallest-size first and lexicographically within a size, so this
/// ordering reproduces the sequential tie-break no matter how the work was
/// partitioned across threads.
#[derive(Debug, Clone)]
struct Scored {
    indices: Vec<usize>,
    totals: Macros,
    diff: f64,
}

impl Scored {
    fn evaluate(indices: Vec<usize>, catalog: &Catalog, target: &Macros) -> Self {
        let totals: Macros = indices.iter().map(|&i| catalog.items()[i].macros).sum();
        let diff = totals.l1_distance(target);
        Self {
            indices,
            totals,
            diff,
        }
    }

    fn into_plan(self, catalog: &Catalog) -> CandidatePlan {
        CandidatePlan {
            items: self
                .indices
                .iter()
                .map(|&i| catalog.items()[i].clone())
                .collect(),
            totals: self.totals,
            diff: self.diff,
        }
    }
}

impl PartialEq for Scored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scored {}

impl PartialOrd for Scored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scored {
    fn cmp(&self, other: &Self) -> Ordering {
        self.diff
            .total_cmp(&other.diff)
            .then_with(|| self.indices.len().cmp(&other.indices.len()))
            .then_with(|| self.indices.cmp(&other.indices))
    }
}

/// Retains the `cap` smallest candidates seen, without materializing the
/// rest of the search space. The worst retained sits on top of the max-heap,
/// so admission is a single comparison.
struct TopSet {
    cap: usize,
    heap: BinaryHeap<Scored>,
}

impl TopSet {
    fn new(cap: usize) -> Self {
        Self {
            cap,
            heap: BinaryHeap::with_capacity(cap + 1),
        }
    }

    fn admit(&mut self, candidate: Scored) {
        if self.cap == 0 {
            return;
        }
        if self.heap.len() < self.cap {
            self.heap.push(candidate);
        } else if let Some(worst) = self.heap.peek() {
            if candidate < *worst {
                self.heap.pop();
                self.heap.push(candidate);
            }
        }
    }

    fn into_sorted(self) -> Vec<Scored> {
        self.heap.into_sorted_vec()
    }
}

/// Best subset of exactly `r` items, partitioned across workers by first
/// index. Ties resolve by enumeration rank, never worker arrival order.
fn stratum_best(catalog: &Catalog, target: &Macros, r: usize) -> Option<Scored> {
    let n = catalog.len();
    (0..n - r + 1)
        .into_par_iter()
        .filter_map(|first| {
            let mut best: Option<Scored> = None;
            for tail in IndexCombinations::over_range(first + 1, n, r - 1) {
                let mut indices = Vec::with_capacity(r);
                indices.push(first);
                indices.extend(tail);
                let candidate = Scored::evaluate(indices, catalog, target);
                // Tails arrive in enumeration order, so strictly-less
                // retention keeps the earliest subset on equal diff.
                if best.as_ref().is_none_or(|b| candidate.diff < b.diff) {
                    best = Some(candidate);
                }
            }
            best
        })
        .min()
}

/// Top `top_n` subsets of exactly `r` items, in `(diff, rank)` order.
fn stratum_ranked(catalog: &Catalog, target: &Macros, r: usize, top_n: usize) -> Vec<Scored> {
    let n = catalog.len();
    let mut merged: Vec<Scored> = (0..n - r + 1)
        .into_par_iter()
        .map(|first| {
            let mut kept = TopSet::new(top_n);
            for tail in IndexCombinations::over_range(first + 1, n, r - 1) {
                let mut indices = Vec::with_capacity(r);
                indices.push(first);
                indices.extend(tail);
                kept.admit(Scored::evaluate(indices, catalog, target));
            }
            kept.into_sorted()
        })
        .reduce(Vec::new, |mut acc, part| {
            acc.extend(part);
            acc
        });

    merged.sort();
    merged.truncate(top_n);
    merged
}

/// Find the single subset of size `[1, max_items]` whose totals are closest
/// to the target.
///
/// Among subsets with equal minimal diff, the earliest in enumeration order
/// wins: smaller subsets beat larger ones, and catalog order decides within
/// a size. Returns `None` for an empty catalog or a zero `max_items`.
pub fn best_plan(catalog: &Catalog, target: &Macros, config: &SearchConfig) -> Option<CandidatePlan> {
    let n = catalog.len();
    let cap = config.max_items.min(n);
    if cap == 0 {
        return None;
    }

    let mut best: Option<Scored> = None;
    for r in 1..=cap {
        if let Some(candidate) = stratum_best(catalog, target, r) {
            // Strictly less: an equal diff at a larger size never displaces
            // the earlier stratum's winner.
            if best.as_ref().is_none_or(|b| candidate.diff < b.diff) {
                best = Some(candidate);
            }
        }
        if config.expired() {
            break;
        }
    }

    best.map(|s| s.into_plan(catalog))
}

/// The `top_n` closest subsets of size `[1, max_items]`, ascending by diff.
///
/// Output is identical to evaluating every subset, stable-sorting by diff in
/// enumeration order, and truncating; the bounded per-worker retention is an
/// implementation detail that cannot change the result.
pub fn ranked_plans(
    catalog: &Catalog,
    target: &Macros,
    config: &SearchConfig,
    top_n: usize,
) -> Vec<CandidatePlan> {
    let n = catalog.len();
    let cap = config.max_items.min(n);
    if cap == 0 || top_n == 0 {
        return Vec::new();
    }

    let mut kept: Vec<Scored> = Vec::new();
    for r in 1..=cap {
        kept.extend(stratum_ranked(catalog, target, r, top_n));
        kept.sort();
        kept.truncate(top_n);
        if config.expired() {
            break;
        }
    }

    kept.into_iter().map(|s| s.into_plan(catalog)).collect()
}
