use crate::{metrics::ViewMetrics, state::QueryState};
use sift_core::{
    Record,
    query::pipeline::{self, PipelineConfig, QueryInput},
};
use std::time::Instant;
use xxhash_rust::xxh3::Xxh3;

///
/// DataView
///
/// Owns a raw collection plus its query state and maintains the derived
/// row order. Recomputation is keyed on a fingerprint of (collection
/// epoch, debounced term, filters, sort key); unchanged inputs are served
/// from the cached order. Derivation itself is the pure pipeline, so the
/// view is safe to refresh on every tick.
///

#[derive(Debug)]
pub struct DataView {
    records: Vec<Record>,
    config: PipelineConfig,
    state: QueryState,
    epoch: u64,
    order: Vec<usize>,
    cached: Option<u64>,
    metrics: ViewMetrics,
}

impl DataView {
    #[must_use]
    pub fn new(config: PipelineConfig, state: QueryState) -> Self {
        Self {
            records: Vec::new(),
            config,
            state,
            epoch: 0,
            order: Vec::new(),
            cached: None,
            metrics: ViewMetrics::default(),
        }
    }

    #[must_use]
    pub fn with_records(config: PipelineConfig, state: QueryState, records: Vec<Record>) -> Self {
        let mut view = Self::new(config, state);
        view.set_records(records);
        view
    }

    /// Replace the raw collection (e.g. a fresh REST response body).
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.epoch = self.epoch.wrapping_add(1);
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut QueryState {
        &mut self.state
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn metrics(&self) -> &ViewMetrics {
        &self.metrics
    }

    /// Tick the debounce clock and recompute when an input changed.
    /// Returns whether a derivation ran.
    pub fn refresh(&mut self, now: Instant) -> bool {
        self.state.tick(now);

        let input = self.state.input();
        let fingerprint = self.fingerprint_of(&input);
        if self.cached == Some(fingerprint) {
            return false;
        }

        self.order = pipeline::derive_indices(&self.records, &input, &self.config);
        self.metrics
            .record_recompute(self.records.len(), self.order.len());
        self.cached = Some(fingerprint);
        true
    }

    /// Derived rows in view order. Call [`Self::refresh`] first; a view
    /// that was never refreshed is empty.
    #[must_use]
    pub fn rows(&self) -> Vec<&Record> {
        self.order.iter().map(|&i| &self.records[i]).collect()
    }

    fn fingerprint_of(&self, input: &QueryInput) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.update(&self.epoch.to_le_bytes());
        hasher.update(input.search_term.as_bytes());
        hasher.update(&[0]);
        for (key, value) in &input.filters {
            hasher.update(key.as_bytes());
            hasher.update(&[0]);
            hasher.update(value.to_string().as_bytes());
            hasher.update(&[0]);
        }
        hasher.update(input.sort_by.as_bytes());
        hasher.digest()
    }
}
