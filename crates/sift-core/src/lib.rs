//! Core engine for Sift: dotted-path field access over schema-less JSON
//! records, search and filter predicate evaluation, typed sort comparators,
//! and the fixed search → filter → sort pipeline.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod coerce;
pub mod compare;
pub mod path;
pub mod query;

/// One item in a queried collection.
///
/// Records are opaque, schema-less JSON values; all field access goes
/// through [`path::resolve`].
pub type Record = serde_json::Value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Evaluation helpers stay at their module paths.
///

pub mod prelude {
    pub use crate::{
        Record,
        compare::{SortDirection, SortKind},
        path::FieldPresence,
        query::{
            config::{
                FilterConfig, FilterKind, FilterRule, MatchKind, SearchConfig, SortConfig,
                SortOption,
            },
            filter::FilterValues,
            pipeline::{PipelineConfig, QueryInput},
        },
    };
}
