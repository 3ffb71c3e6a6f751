use serde_json::Value;
use sift_core::query::{filter::FilterValues, pipeline::QueryInput};
use std::time::{Duration, Instant};

/// Default quiescence window before an edited search term participates in
/// derivation.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

///
/// QueryState
///
/// Caller-owned search/filter/sort state. The visible search term updates
/// immediately (text inputs stay responsive); the copy that participates
/// in derivation trails it by one quiescence window, and rapid edits
/// collapse into a single promotion. Filters and the sort key apply
/// immediately.
///

#[derive(Clone, Debug)]
pub struct QueryState {
    initial: QueryInput,
    term: String,
    debounced_term: String,
    pending: Option<Pending>,
    filters: FilterValues,
    sort_by: String,
    window: Duration,
}

// Single outstanding debounce deadline; each edit replaces it.
#[derive(Clone, Debug)]
struct Pending {
    term: String,
    due: Instant,
}

impl QueryState {
    #[must_use]
    pub fn new(initial: QueryInput) -> Self {
        Self::with_window(initial, DEFAULT_DEBOUNCE)
    }

    #[must_use]
    pub fn with_window(initial: QueryInput, window: Duration) -> Self {
        Self {
            term: initial.search_term.clone(),
            debounced_term: initial.search_term.clone(),
            pending: None,
            filters: initial.filters.clone(),
            sort_by: initial.sort_by.clone(),
            initial,
            window,
        }
    }

    /// Visible search term; updates immediately on edit.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.term
    }

    /// Term that participates in derivation; trails edits by the window.
    #[must_use]
    pub fn debounced_term(&self) -> &str {
        &self.debounced_term
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterValues {
        &self.filters
    }

    #[must_use]
    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    /// Record an edit and restart the debounce deadline.
    pub fn set_search_term(&mut self, term: impl Into<String>, now: Instant) {
        let term = term.into();
        self.term.clone_from(&term);
        self.pending = Some(Pending {
            term,
            due: now + self.window,
        });
    }

    /// Promote a quiesced term. Returns whether the debounced value
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending.take_if(|pending| now >= pending.due) else {
            return false;
        };

        let changed = pending.term != self.debounced_term;
        self.debounced_term = pending.term;
        changed
    }

    /// Set one filter key's value; applies immediately.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.filters.insert(key.into(), value.into());
    }

    pub fn remove_filter(&mut self, key: &str) {
        self.filters.remove(key);
    }

    /// Switch the active sort key; applies immediately.
    pub fn set_sort(&mut self, sort_by: impl Into<String>) {
        self.sort_by = sort_by.into();
    }

    /// Reset term, filters, and sort key to the constructed initial
    /// values, dropping any pending debounce.
    pub fn clear_filters(&mut self) {
        self.term.clone_from(&self.initial.search_term);
        self.debounced_term.clone_from(&self.initial.search_term);
        self.pending = None;
        self.filters.clone_from(&self.initial.filters);
        self.sort_by.clone_from(&self.initial.sort_by);
    }

    /// True iff the visible term is non-empty, or the sort key or any
    /// filter differs from its initial value.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.term.is_empty()
            || self.sort_by != self.initial.sort_by
            || self.filters != self.initial.filters
    }

    /// Snapshot consumed by the pipeline; uses the debounced term.
    #[must_use]
    pub fn input(&self) -> QueryInput {
        QueryInput {
            search_term: self.debounced_term.clone(),
            filters: self.filters.clone(),
            sort_by: self.sort_by.clone(),
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(QueryInput::default())
    }
}
