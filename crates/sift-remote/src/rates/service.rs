use crate::{
    config::RemoteConfig,
    currency::Currency,
    error::{ProviderError, RatesError},
    rates::{RateTable, fallback, provider::RateProvider, store::RateStore},
};
use std::sync::Mutex;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

///
/// RateService
///
/// Fetches exchange rates through an ordered provider chain with a cache
/// in front and the static fallback table behind. Provider failures of
/// any kind mean "try the next"; only a base no provider and no fallback
/// can serve is an error.
///

pub struct RateService {
    providers: Vec<Box<dyn RateProvider>>,
    store: Mutex<Box<dyn RateStore + Send>>,
    config: RemoteConfig,
}

impl RateService {
    #[must_use]
    pub fn new(
        providers: Vec<Box<dyn RateProvider>>,
        store: Box<dyn RateStore + Send>,
        config: RemoteConfig,
    ) -> Self {
        Self {
            providers,
            store: Mutex::new(store),
            config,
        }
    }

    /// Rates for `base`: cache, then each provider in order, then the
    /// static fallback.
    pub async fn rates(&self, base: &Currency) -> Result<RateTable, RatesError> {
        if let Some(table) = self.cached(base) {
            debug!(%base, "serving cached rates");
            return Ok(table);
        }

        for provider in &self.providers {
            let fetch = provider.fetch(base);
            match tokio::time::timeout(self.config.provider_timeout(), fetch).await {
                Ok(Ok(table)) => {
                    info!(%base, provider = provider.name(), "rates fetched");
                    self.remember(&table);
                    return Ok(table);
                }
                Ok(Err(err)) => {
                    warn!(%base, provider = provider.name(), %err, "rate provider failed");
                }
                Err(_) => {
                    let err = ProviderError::Timeout {
                        timeout_secs: self.config.provider_timeout_secs,
                    };
                    warn!(%base, provider = provider.name(), %err, "rate provider failed");
                }
            }
        }

        fallback::table(base).map_or_else(
            || {
                Err(RatesError::Exhausted {
                    base: base.to_string(),
                    attempted: self.providers.len(),
                })
            },
            |table| {
                warn!(%base, "all providers failed, using static fallback rates");
                Ok(table)
            },
        )
    }

    /// Convert `amount` from one currency to another. Same-currency
    /// conversion and any failure to obtain a usable rate both yield the
    /// original amount; conversion never blocks a display.
    pub async fn convert(&self, amount: f64, from: &Currency, to: &Currency) -> f64 {
        if from == to {
            return amount;
        }

        match self.rates(from).await {
            Ok(table) => table.rate(to).map_or_else(
                || {
                    warn!(%from, %to, "no rate for target, keeping original amount");
                    amount
                },
                |rate| amount * rate,
            ),
            Err(err) => {
                warn!(%from, %to, %err, "rates unavailable, keeping original amount");
                amount
            }
        }
    }

    fn cache_key(base: &Currency) -> String {
        format!("rates:{base}")
    }

    fn cached(&self, base: &Currency) -> Option<RateTable> {
        let stored = match self.store.lock() {
            Ok(store) => store.get(&Self::cache_key(base))?,
            Err(_) => return None,
        };
        let table: RateTable = serde_json::from_str(&stored).ok()?;

        let age = OffsetDateTime::now_utc().unix_timestamp() - table.fetched_at;
        let fresh = u64::try_from(age).is_ok_and(|age| age <= self.config.cache_ttl_secs);
        fresh.then_some(table)
    }

    fn remember(&self, table: &RateTable) {
        let Ok(serialized) = serde_json::to_string(table) else {
            return;
        };

        if let Ok(mut store) = self.store.lock() {
            store.set(&Self::cache_key(&table.base), serialized);
        }
    }
}
