//! Static last-resort rates, used when every provider has failed.
//! Indicative only; `fetched_at` is 0 so the table never reads as fresh.

use crate::{currency::Currency, rates::RateTable};
use std::collections::BTreeMap;

// Approximate mid-market rates against USD.
const USD_RATES: &[(&str, f64)] = &[
    ("AED", 3.67),
    ("AUD", 1.52),
    ("CAD", 1.36),
    ("CHF", 0.88),
    ("CNY", 7.24),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 149.50),
    ("NZD", 1.64),
    ("SEK", 10.45),
    ("SGD", 1.34),
    ("USD", 1.0),
];

/// Fallback table for `base`, cross-rated through USD. `None` when the
/// base itself is not in the static set.
#[must_use]
pub fn table(base: &Currency) -> Option<RateTable> {
    let base_per_usd = USD_RATES
        .iter()
        .find(|(code, _)| *code == base.as_str())
        .map(|(_, rate)| *rate)?;

    let rates: BTreeMap<Currency, f64> = USD_RATES
        .iter()
        .filter_map(|(code, rate)| {
            let currency = Currency::new(code).ok()?;
            Some((currency, rate / base_per_usd))
        })
        .collect();

    Some(RateTable::new(base.clone(), rates, 0))
}
