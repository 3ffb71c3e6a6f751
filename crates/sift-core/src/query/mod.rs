//! Declarative query evaluation over schema-less records.
//!
//! The three stages are pure functions over `(collection, criteria,
//! config)`; [`pipeline`] composes them in the fixed search → filter →
//! sort order.

pub mod config;
pub mod filter;
pub mod pipeline;
pub mod search;
pub mod sort;

#[cfg(test)]
mod tests;
