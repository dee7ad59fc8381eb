/// Lazy index-combination enumerator.
///
/// Yields every size-`r` combination of indices in `[lo, hi)` in
/// lexicographic order. This is the canonical enumeration order for the
/// search engine: no combination is ever materialized ahead of time, and the
/// sequence restarts identically for the same inputs.
pub(crate) struct IndexCombinations {
    hi: usize,
    r: usize,
    state: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl IndexCombinations {
    pub fn new(n: usize, r: usize) -> Self {
        Self::over_range(0, n, r)
    }

    /// Combinations drawn from `[lo, hi)`.
    pub fn over_range(lo: usize, hi: usize, r: usize) -> Self {
        let available = hi.saturating_sub(lo);
        Self {
            hi,
            r,
            state: (lo..lo + r.min(available)).collect(),
            started: false,
            exhausted: r > available,
        }
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            if self.r == 0 {
                self.exhausted = true;
                return Some(Vec::new());
            }
            return Some(self.state.clone());
        }

        // Advance the rightmost index that still has room, then reset the
        // tail to the run immediately after it.
        let mut i = self.r;
        while i > 0 {
            i -= 1;
            if self.state[i] < self.hi - (self.r - i) {
                self.state[i] += 1;
                for j in i + 1..self.r {
                    self.state[j] = self.state[j - 1] + 1;
                }
                return Some(self.state.clone());
            }
        }

        self.exhausted = true;
        None
    }
}
