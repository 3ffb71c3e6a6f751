use crate::{
    coerce,
    path::{self, FieldPresence},
    query::config::{FilterConfig, FilterKind, FilterRule},
};
use serde_json::Value;
use std::collections::BTreeMap;

/// Active filter values keyed by filter key, as supplied by the caller.
pub type FilterValues = BTreeMap<String, Value>;

/// Sentinel value that deactivates a filter key.
const SENTINEL_ALL: &str = "all";

/// Keep records passing every active filter key (logical AND across keys).
///
/// Inactive values (null, empty string, `"all"`) and keys without a
/// configured rule are no-ops. Input order is preserved.
#[must_use]
pub fn filter(records: &[Value], values: &FilterValues, config: &FilterConfig) -> Vec<Value> {
    let active = active_rules(values, config);
    if active.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| passes(record, &active))
        .cloned()
        .collect()
}

/// Whether one record passes every active filter key.
#[must_use]
pub fn matches(record: &Value, values: &FilterValues, config: &FilterConfig) -> bool {
    passes(record, &active_rules(values, config))
}

/// Whether a filter value participates in evaluation.
#[must_use]
pub fn is_active(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.is_empty() && text != SENTINEL_ALL,
        _ => true,
    }
}

fn active_rules<'a>(
    values: &'a FilterValues,
    config: &'a FilterConfig,
) -> Vec<(&'a Value, &'a FilterRule)> {
    values
        .iter()
        .filter(|(_, value)| is_active(value))
        // Unknown keys are always-pass by contract.
        .filter_map(|(key, value)| config.rule(key).map(|rule| (value, rule)))
        .collect()
}

fn passes(record: &Value, active: &[(&Value, &FilterRule)]) -> bool {
    active
        .iter()
        .all(|(wanted, rule)| rule_matches(record, wanted, rule))
}

fn rule_matches(record: &Value, wanted: &Value, rule: &FilterRule) -> bool {
    let FieldPresence::Present(actual) = path::resolve(record, &rule.field) else {
        return false;
    };

    match rule.kind {
        FilterKind::Exact => actual == wanted,
        FilterKind::Array => actual
            .as_array()
            .is_some_and(|items| items.contains(wanted)),
        FilterKind::Range => range_matches(actual, wanted),
        FilterKind::Boolean => boolean_matches(actual, wanted),
        FilterKind::Contains => text_contains_ci(actual, wanted),
    }
}

// Filter value "min-max"; the field's numeric form must lie inside the
// inclusive interval. Unparseable bounds or fields never match.
fn range_matches(actual: &Value, wanted: &Value) -> bool {
    let Some(bounds) = wanted.as_str() else {
        return false;
    };
    let Some((min, max)) = bounds.split_once('-') else {
        return false;
    };
    let (Ok(min), Ok(max)) = (min.trim().parse::<f64>(), max.trim().parse::<f64>()) else {
        return false;
    };

    coerce::numeric_repr(actual).is_some_and(|n| n >= min && n <= max)
}

fn boolean_matches(actual: &Value, wanted: &Value) -> bool {
    let wanted = match wanted {
        Value::Bool(flag) => *flag,
        Value::String(text) => match text.as_str() {
            "true" => true,
            "false" => false,
            _ => return false,
        },
        _ => return false,
    };

    coerce::truthy(actual) == wanted
}

fn text_contains_ci(actual: &Value, wanted: &Value) -> bool {
    let (Some(actual), Some(wanted)) = (coerce::text_repr(actual), coerce::text_repr(wanted))
    else {
        return false;
    };

    actual.to_lowercase().contains(&wanted.to_lowercase())
}
