//! Stateful facade over the `sift-core` pipeline: debounced query state,
//! a memoizing [`view::DataView`], and per-view recompute metrics.

#![warn(unreachable_pub)]

pub mod metrics;
pub mod state;
pub mod view;

pub use sift_core;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        metrics::ViewMetrics,
        state::{DEFAULT_DEBOUNCE, QueryState},
        view::DataView,
    };
    pub use sift_core::prelude::*;
}
