//! Value coercions shared by the evaluators and comparators.
//!
//! Every helper is total over [`serde_json::Value`]: input that has no
//! representation in the requested family yields `None` (or `false` for
//! truthiness), never an error.

use serde_json::Value;
use std::borrow::Cow;
use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

const MILLIS_PER_SECOND: i128 = 1_000;
const NANOS_PER_MILLI: i128 = 1_000_000;

/// Text form of a scalar value.
///
/// Strings pass through unallocated; numbers and booleans are formatted.
/// Null, arrays, and objects have no text form.
#[must_use]
pub fn text_repr(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric form: numbers as `f64`, strings parsed as `f64`.
#[must_use]
pub fn numeric_repr(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Script-style truthiness: null, `false`, `0`, NaN, and `""` are false;
/// arrays and objects are always true.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Timestamp form in whole milliseconds since the Unix epoch.
///
/// Accepts RFC 3339 strings, ISO `YYYY-MM-DD` dates, and numeric epoch
/// milliseconds. Unparseable input has no timestamp form.
#[must_use]
pub fn timestamp_repr(value: &Value) -> Option<i128> {
    match value {
        Value::String(text) => parse_timestamp_text(text.trim()),
        Value::Number(number) => {
            let millis = number.as_f64()?;
            millis.is_finite().then_some(millis as i128)
        }
        _ => None,
    }
}

fn parse_timestamp_text(text: &str) -> Option<i128> {
    if let Ok(moment) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(moment.unix_timestamp_nanos() / NANOS_PER_MILLI);
    }

    let date_only = format_description!("[year]-[month]-[day]");
    let date = Date::parse(text, date_only).ok()?;

    Some(i128::from(date.midnight().assume_utc().unix_timestamp()) * MILLIS_PER_SECOND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_repr_covers_scalars_only() {
        assert_eq!(text_repr(&json!("MT5")).as_deref(), Some("MT5"));
        assert_eq!(text_repr(&json!(42)).as_deref(), Some("42"));
        assert_eq!(text_repr(&json!(1.5)).as_deref(), Some("1.5"));
        assert_eq!(text_repr(&json!(true)).as_deref(), Some("true"));
        assert!(text_repr(&Value::Null).is_none());
        assert!(text_repr(&json!([1, 2])).is_none());
        assert!(text_repr(&json!({"a": 1})).is_none());
    }

    #[test]
    fn numeric_repr_parses_numbers_and_numeric_strings() {
        assert_eq!(numeric_repr(&json!(2.5)), Some(2.5));
        assert_eq!(numeric_repr(&json!("  -3.25 ")), Some(-3.25));
        assert!(numeric_repr(&json!("1:500")).is_none());
        assert!(numeric_repr(&Value::Null).is_none());
    }

    #[test]
    fn truthy_follows_script_semantics() {
        assert!(!truthy(&Value::Null));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(truthy(&json!("no")));
        assert!(truthy(&json!(-1)));
        assert!(truthy(&json!([])));
        assert!(truthy(&json!({})));
    }

    #[test]
    fn timestamp_repr_accepts_rfc3339_iso_dates_and_epoch_millis() {
        assert_eq!(
            timestamp_repr(&json!("1970-01-01T00:00:01Z")),
            Some(1_000)
        );
        assert_eq!(timestamp_repr(&json!("1970-01-02")), Some(86_400_000));
        assert_eq!(timestamp_repr(&json!(1_700_000_000_000_u64)), Some(1_700_000_000_000));
        assert!(timestamp_repr(&json!("not a date")).is_none());
        assert!(timestamp_repr(&json!(null)).is_none());
    }
}
