pub mod fallback;
pub mod provider;
pub mod service;
pub mod store;

use crate::currency::Currency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// RateTable
///
/// Exchange rates quoted against one base currency, with the unix
/// timestamp (seconds) the table was obtained at.
///

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RateTable {
    pub base: Currency,
    pub rates: BTreeMap<Currency, f64>,
    pub fetched_at: i64,
}

impl RateTable {
    #[must_use]
    pub fn new(base: Currency, rates: BTreeMap<Currency, f64>, fetched_at: i64) -> Self {
        Self {
            base,
            rates,
            fetched_at,
        }
    }

    /// Rate for one unit of the base in `target`. The base itself is
    /// always 1.0 even when absent from the map.
    #[must_use]
    pub fn rate(&self, target: &Currency) -> Option<f64> {
        if *target == self.base {
            return Some(1.0);
        }

        self.rates.get(target).copied()
    }
}
