use serde_json::Value;

///
/// FieldPresence
///
/// Result of resolving a dotted path against a record. This distinguishes
/// between a missing field and a present field whose value may be JSON
/// null.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldPresence<'a> {
    /// Path resolved to a value (including JSON null at the leaf).
    Present(&'a Value),
    /// Some segment of the path does not exist on the record.
    Missing,
}

impl<'a> FieldPresence<'a> {
    /// Collapse to an optional value reference.
    #[must_use]
    pub const fn value(self) -> Option<&'a Value> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing => None,
        }
    }

    #[must_use]
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Resolve a dot-delimited path (e.g. `"tradingAccount.login"`) against a
/// record.
///
/// Objects descend by key; arrays descend by numeric segment. Traversal
/// stops with `Missing` the first time a segment is absent or an
/// intermediate value cannot be descended (scalars, JSON null). Malformed
/// paths resolve to `Missing`; resolution never errors.
#[must_use]
pub fn resolve<'a>(record: &'a Value, path: &str) -> FieldPresence<'a> {
    if path.is_empty() {
        return FieldPresence::Missing;
    }

    let mut current = record;
    for segment in path.split('.') {
        if segment.is_empty() {
            return FieldPresence::Missing;
        }

        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            // A null or scalar link cannot be descended further.
            _ => None,
        };

        match next {
            Some(value) => current = value,
            None => return FieldPresence::Missing,
        }
    }

    FieldPresence::Present(current)
}
