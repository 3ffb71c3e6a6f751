use crate::query::{
    config::{FilterConfig, SearchConfig, SortConfig},
    filter::{self, FilterValues},
    search, sort,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

///
/// PipelineConfig
///
/// The three stage configurations a derived view is computed under.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub sort: SortConfig,
}

///
/// QueryInput
///
/// One snapshot of caller query state consumed by a derivation.
///

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct QueryInput {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub filters: FilterValues,
    #[serde(default)]
    pub sort_by: String,
}

/// Derive the searched, filtered, sorted view of a collection.
///
/// Stage order is fixed: search, then filter, then sort. Downstream
/// stages compose on the upstream stage's output. The input is never
/// mutated, and identical inputs derive identical output.
#[must_use]
pub fn derive(records: &[Value], input: &QueryInput, config: &PipelineConfig) -> Vec<Value> {
    derive_indices(records, input, config)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}

/// Index form of [`derive`] for callers that keep the backing records.
///
/// Search and filter retain indices in input order; only the sort stage
/// reorders, stably.
#[must_use]
pub fn derive_indices(records: &[Value], input: &QueryInput, config: &PipelineConfig) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len())
        .filter(|&i| search::matches(&records[i], &input.search_term, &config.search))
        .filter(|&i| filter::matches(&records[i], &input.filters, &config.filter))
        .collect();

    if let Some(option) = config.sort.option(&input.sort_by) {
        order.sort_by(|&a, &b| sort::compare_records(&records[a], &records[b], option));
    }

    order
}
