//! Typed comparators used by the sort engine.
//!
//! Ordering rules:
//! 1. Comparable values order before uncoercible/absent ones, in both
//!    directions.
//! 2. Two comparable values order by the sort kind's comparison, flipped
//!    by the direction.
//!
//! This closes the invalid-date ambiguity in the source material: a value
//! that cannot be coerced under the configured kind always sorts after
//! every value that can.

use crate::coerce;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

///
/// SortKind
///
/// Comparator family applied to a sort option's field.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKind {
    Number,
    Date,
    #[default]
    String,
}

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply this direction to a comparable-vs-comparable ordering.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

///
/// SortKey
///
/// Coerced, directly comparable form of one field value. Keys produced
/// under a single sort option never mix variants.
///

#[derive(Clone, Debug, PartialEq)]
enum SortKey {
    Number(f64),
    Date(i128),
    Text(String),
}

impl SortKey {
    fn cmp_same_kind(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            // Unreachable under a single sort option; keep ties stable.
            _ => Ordering::Equal,
        }
    }
}

/// Compare two resolved field values under one sort kind and direction.
///
/// `None` stands for an absent field. Uncoercible and absent values rank
/// after comparable ones regardless of direction. String comparison is
/// case-insensitive codepoint order over lowercased text, not locale
/// collation.
#[must_use]
pub fn compare_resolved(
    left: Option<&Value>,
    right: Option<&Value>,
    kind: SortKind,
    direction: SortDirection,
) -> Ordering {
    match (sort_key(left, kind), sort_key(right, kind)) {
        (Some(left), Some(right)) => direction.apply(left.cmp_same_kind(&right)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sort_key(value: Option<&Value>, kind: SortKind) -> Option<SortKey> {
    let value = value?;

    match kind {
        SortKind::Number => coerce::numeric_repr(value).map(SortKey::Number),
        SortKind::Date => coerce::timestamp_repr(value).map(SortKey::Date),
        SortKind::String => {
            coerce::text_repr(value).map(|text| SortKey::Text(text.to_lowercase()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cmp(left: &Value, right: &Value, kind: SortKind, direction: SortDirection) -> Ordering {
        compare_resolved(Some(left), Some(right), kind, direction)
    }

    #[test]
    fn number_comparison_coerces_strings_and_flips_on_desc() {
        assert_eq!(
            cmp(&json!("50"), &json!(100), SortKind::Number, SortDirection::Asc),
            Ordering::Less
        );
        assert_eq!(
            cmp(&json!("50"), &json!(100), SortKind::Number, SortDirection::Desc),
            Ordering::Greater
        );
    }

    #[test]
    fn date_comparison_orders_parsed_timestamps() {
        assert_eq!(
            cmp(
                &json!("2024-01-01T00:00:00Z"),
                &json!("2024-06-01"),
                SortKind::Date,
                SortDirection::Asc
            ),
            Ordering::Less
        );
    }

    #[test]
    fn string_comparison_is_case_insensitive() {
        assert_eq!(
            cmp(&json!("alpha"), &json!("ALPHA"), SortKind::String, SortDirection::Asc),
            Ordering::Equal
        );
        assert_eq!(
            cmp(&json!("Beta"), &json!("alpha"), SortKind::String, SortDirection::Asc),
            Ordering::Greater
        );
    }

    #[test]
    fn uncoercible_values_sort_after_comparable_in_both_directions() {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            assert_eq!(
                cmp(&json!(10), &json!("bad date"), SortKind::Date, direction),
                Ordering::Less
            );
            assert_eq!(
                compare_resolved(None, Some(&json!(1)), SortKind::Number, direction),
                Ordering::Greater
            );
        }
        assert_eq!(
            compare_resolved(None, None, SortKind::Number, SortDirection::Desc),
            Ordering::Equal
        );
    }
}
