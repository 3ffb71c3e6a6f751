use crate::{
    compare, path,
    query::config::{SortConfig, SortOption},
};
use serde_json::Value;
use std::cmp::Ordering;

/// Order a collection by one named sort option.
///
/// `"default"`, empty, and unknown keys are the identity. The returned
/// collection is new; the input is never reordered in place. Ties keep
/// their original relative order (stable sort contract).
#[must_use]
pub fn sort(records: &[Value], sort_key: &str, config: &SortConfig) -> Vec<Value> {
    let Some(option) = config.option(sort_key) else {
        return records.to_vec();
    };

    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| compare_records(&records[a], &records[b], option));

    order.into_iter().map(|i| records[i].clone()).collect()
}

/// Compare two records under one sort option.
#[must_use]
pub fn compare_records(left: &Value, right: &Value, option: &SortOption) -> Ordering {
    let left = path::resolve(left, &option.field).value();
    let right = path::resolve(right, &option.field).value();

    compare::compare_resolved(left, right, option.kind, option.direction)
}
