use crate::{
    coerce,
    path::{self, FieldPresence},
    query::config::{MatchKind, SearchConfig},
};
use serde_json::Value;

/// Keep records where any configured field matches the term.
///
/// Empty terms and empty field lists are the identity; input order is
/// preserved. Matching is case-insensitive over the text form of each
/// field, and absent fields never match.
#[must_use]
pub fn search(records: &[Value], term: &str, config: &SearchConfig) -> Vec<Value> {
    if term.is_empty() || config.fields.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches(record, term, config))
        .cloned()
        .collect()
}

/// Whether one record matches the search term on any configured field.
#[must_use]
pub fn matches(record: &Value, term: &str, config: &SearchConfig) -> bool {
    if term.is_empty() || config.fields.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    config
        .fields
        .iter()
        .any(|field| field_matches(record, field, &needle, config.kind))
}

fn field_matches(record: &Value, field: &str, needle: &str, kind: MatchKind) -> bool {
    let FieldPresence::Present(value) = path::resolve(record, field) else {
        return false;
    };
    let Some(text) = coerce::text_repr(value) else {
        return false;
    };
    let haystack = text.to_lowercase();

    match kind {
        MatchKind::Contains => haystack.contains(needle),
        MatchKind::Exact => haystack == needle,
        MatchKind::StartsWith => haystack.starts_with(needle),
        MatchKind::Fuzzy => subsequence_match(&haystack, needle),
    }
}

// Ordered-subsequence scan; the regex-interleaving formulation from the
// source collapses to a single pass over the haystack.
fn subsequence_match(haystack: &str, needle: &str) -> bool {
    let mut pending = needle.chars();
    let Some(mut wanted) = pending.next() else {
        return true;
    };

    for ch in haystack.chars() {
        if ch == wanted {
            match pending.next() {
                Some(next) => wanted = next,
                None => return true,
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::config::SearchConfig;
    use serde_json::json;

    fn accounts() -> Vec<Value> {
        vec![
            json!({ "name": "Alpha", "balance": 100, "account": { "login": "MT5-1001" } }),
            json!({ "name": "Beta", "balance": 50, "account": { "login": "MT4-2002" } }),
        ]
    }

    #[test]
    fn empty_term_and_empty_fields_are_identity() {
        let records = accounts();

        assert_eq!(search(&records, "", &SearchConfig::new(["name"])), records);
        assert_eq!(
            search(&records, "alpha", &SearchConfig::default()),
            records
        );
    }

    #[test]
    fn contains_keeps_any_field_match_case_insensitively() {
        let records = accounts();
        let config = SearchConfig::new(["name", "account.login"]);

        let hits = search(&records, "alp", &config);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["name"], json!("Alpha"));

        // Second configured field matches even when the first does not.
        let hits = search(&records, "mt4", &config);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["name"], json!("Beta"));
    }

    #[test]
    fn exact_and_starts_with_narrow_the_match() {
        let records = accounts();

        let exact = SearchConfig::new(["name"]).with_kind(MatchKind::Exact);
        assert!(search(&records, "alph", &exact).is_empty());
        assert_eq!(search(&records, "ALPHA", &exact).len(), 1);

        let prefix = SearchConfig::new(["name"]).with_kind(MatchKind::StartsWith);
        assert_eq!(search(&records, "be", &prefix).len(), 1);
        assert!(search(&records, "eta", &prefix).is_empty());
    }

    #[test]
    fn fuzzy_matches_ordered_subsequences_only() {
        let records = accounts();
        let config = SearchConfig::new(["account.login"]).with_kind(MatchKind::Fuzzy);

        // m..t..5..1 appears in order within "mt5-1001".
        assert_eq!(search(&records, "mt51", &config).len(), 1);
        // Reversed order never matches.
        assert!(search(&records, "15tm", &config).is_empty());
    }

    #[test]
    fn numeric_fields_match_via_their_text_form() {
        let records = accounts();
        let config = SearchConfig::new(["balance"]);

        assert_eq!(search(&records, "100", &config).len(), 1);
    }

    #[test]
    fn absent_fields_never_match() {
        let records = accounts();
        let config = SearchConfig::new(["missing.path"]);

        assert!(search(&records, "alpha", &config).is_empty());
    }
}
