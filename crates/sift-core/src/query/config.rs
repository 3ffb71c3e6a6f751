use crate::compare::{SortDirection, SortKind};
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sort key treated as "no sorting requested".
pub const DEFAULT_SORT_KEY: &str = "default";

///
/// MatchKind
///
/// String-matching semantics applied by the search evaluator.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKind {
    #[default]
    Contains,
    Exact,
    StartsWith,
    /// Ordered-subsequence match: the term's characters must appear in the
    /// target in order, with any characters interspersed.
    Fuzzy,
}

///
/// SearchConfig
///
/// Which field paths the search term is checked against, and how.
/// An empty field list makes search the identity.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default, rename = "type")]
    pub kind: MatchKind,
}

impl SearchConfig {
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            kind: MatchKind::default(),
        }
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: MatchKind) -> Self {
        self.kind = kind;
        self
    }
}

///
/// FilterKind
///
/// Per-key test applied by the filter evaluator.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    Exact,
    Array,
    Range,
    Boolean,
    #[default]
    Contains,
}

///
/// FilterRule
///
/// One filter key's field path and test semantics.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct FilterRule {
    pub field: String,
    #[serde(default, rename = "type")]
    pub kind: FilterKind,
}

impl FilterRule {
    #[must_use]
    pub fn new(field: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

///
/// FilterConfig
///
/// Mapping from filter key to rule. Keys without a rule are ignored by
/// evaluation (always-pass), a permissive default rather than an error.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FilterConfig {
    rules: BTreeMap<String, FilterRule>,
}

impl FilterConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_rule(mut self, key: impl Into<String>, rule: FilterRule) -> Self {
        self.rules.insert(key.into(), rule);
        self
    }

    /// Rule configured for a filter key, if any.
    #[must_use]
    pub fn rule(&self, key: &str) -> Option<&FilterRule> {
        self.rules.get(key)
    }
}

///
/// SortOption
///
/// One named sort: field path, comparator family, and direction.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct SortOption {
    pub field: String,
    #[serde(default, rename = "type")]
    pub kind: SortKind,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortOption {
    #[must_use]
    pub fn new(field: impl Into<String>, kind: SortKind, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            kind,
            direction,
        }
    }
}

///
/// SortConfig
///
/// Mapping from sort key to option. The key `"default"`, the empty key,
/// and unknown keys all resolve to "leave the collection order alone".
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SortConfig {
    options: BTreeMap<String, SortOption>,
}

impl SortConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, option: SortOption) -> Self {
        self.options.insert(key.into(), option);
        self
    }

    /// Sort option for a key; `None` means identity ordering.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&SortOption> {
        if key.is_empty() || key == DEFAULT_SORT_KEY {
            return None;
        }

        self.options.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configs_deserialize_from_wire_shapes_with_defaults() {
        let search: SearchConfig =
            serde_json::from_str(r#"{ "fields": ["name", "account.login"] }"#)
                .expect("search config should deserialize");
        assert_eq!(search.kind, MatchKind::Contains);

        let filters: FilterConfig = serde_json::from_str(
            r#"{ "tier": { "field": "balance", "type": "range" },
                 "platform": { "field": "platform" } }"#,
        )
        .expect("filter config should deserialize");
        assert_eq!(
            filters.rule("tier").map(|rule| rule.kind),
            Some(FilterKind::Range)
        );
        assert_eq!(
            filters.rule("platform").map(|rule| rule.kind),
            Some(FilterKind::Contains)
        );

        let sorts: SortConfig = serde_json::from_str(
            r#"{ "balanceDesc": { "field": "balance", "type": "number", "direction": "desc" },
                 "name": { "field": "name" } }"#,
        )
        .expect("sort config should deserialize");
        let by_name = sorts.option("name").expect("name option should exist");
        assert_eq!(by_name.kind, SortKind::String);
        assert_eq!(by_name.direction, SortDirection::Asc);
    }

    #[test]
    fn sort_config_resolves_default_and_unknown_keys_to_identity() {
        let config = SortConfig::new().with_option(
            "balance",
            SortOption::new("balance", SortKind::Number, SortDirection::Desc),
        );

        assert!(config.option(DEFAULT_SORT_KEY).is_none());
        assert!(config.option("").is_none());
        assert!(config.option("unknown").is_none());
        assert!(config.option("balance").is_some());
    }
}
