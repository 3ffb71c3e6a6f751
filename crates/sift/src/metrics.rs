///
/// ViewMetrics
///
/// Per-view recompute counters for endpoint/test plumbing. Scoped to the
/// owning view; there is no process-global metrics state.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ViewMetrics {
    recomputes: u64,
    rows_in: usize,
    rows_out: usize,
}

impl ViewMetrics {
    /// Number of derivations this view has run.
    #[must_use]
    pub const fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Raw collection size at the last derivation.
    #[must_use]
    pub const fn rows_in(&self) -> usize {
        self.rows_in
    }

    /// Derived view size at the last derivation.
    #[must_use]
    pub const fn rows_out(&self) -> usize {
        self.rows_out
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record_recompute(&mut self, rows_in: usize, rows_out: usize) {
        self.recomputes = self.recomputes.saturating_add(1);
        self.rows_in = rows_in;
        self.rows_out = rows_out;
    }
}
