use crate::{
    currency::Currency,
    error::ProviderError,
    rates::RateTable,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::{collections::BTreeMap, time::Duration};
use time::OffsetDateTime;

///
/// RateProvider
///
/// One upstream exchange-rate API. The service tries providers in order
/// and treats any error as "try the next one".
///

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn fetch(&self, base: &Currency) -> Result<RateTable, ProviderError>;
}

// Built once per provider at construction; fetches reuse it.
fn http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

// Builds a table from raw code/rate pairs, dropping codes that fail
// validation and rates that are not finite-positive.
fn table_from_codes(
    base: &Currency,
    raw: BTreeMap<String, f64>,
) -> Result<RateTable, ProviderError> {
    let rates: BTreeMap<Currency, f64> = raw
        .into_iter()
        .filter_map(|(code, rate)| {
            let currency = Currency::new(&code).ok()?;
            (rate.is_finite() && rate > 0.0).then_some((currency, rate))
        })
        .collect();

    if rates.is_empty() {
        return Err(ProviderError::MissingBase {
            base: base.to_string(),
        });
    }

    Ok(RateTable::new(
        base.clone(),
        rates,
        OffsetDateTime::now_utc().unix_timestamp(),
    ))
}

///
/// OpenErApiProvider
///
/// open.er-api.com v6. Success is signalled in the body (`result`), not
/// just the HTTP status. The client is built once at construction and
/// reused across fetches.
///

pub struct OpenErApiProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct OpenErApiBody {
    result: String,
    base_code: String,
    rates: BTreeMap<String, f64>,
}

impl OpenErApiProvider {
    pub fn new(timeout: Duration) -> Result<Self, ProviderError> {
        Self::with_base_url("https://open.er-api.com/v6", timeout)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl RateProvider for OpenErApiProvider {
    fn name(&self) -> &str {
        "open-er-api"
    }

    async fn fetch(&self, base: &Currency) -> Result<RateTable, ProviderError> {
        let url = format!("{}/latest/{base}", self.base_url);
        let body: OpenErApiBody = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if body.result != "success" {
            return Err(ProviderError::MalformedResponse {
                message: format!("result was {:?}", body.result),
            });
        }
        if body.base_code != base.as_str() {
            return Err(ProviderError::MalformedResponse {
                message: format!("asked for {base}, got {}", body.base_code),
            });
        }

        table_from_codes(base, body.rates)
    }
}

///
/// FrankfurterProvider
///
/// api.frankfurter.app. The body omits the base from its rates map;
/// [`RateTable::rate`] covers that case. One client per provider, reused
/// across fetches.
///

pub struct FrankfurterProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct FrankfurterBody {
    base: String,
    rates: BTreeMap<String, f64>,
}

impl FrankfurterProvider {
    pub fn new(timeout: Duration) -> Result<Self, ProviderError> {
        Self::with_base_url("https://api.frankfurter.app", timeout)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    fn name(&self) -> &str {
        "frankfurter"
    }

    async fn fetch(&self, base: &Currency) -> Result<RateTable, ProviderError> {
        let url = format!("{}/latest?from={base}", self.base_url);
        let body: FrankfurterBody = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if body.base != base.as_str() {
            return Err(ProviderError::MalformedResponse {
                message: format!("asked for {base}, got {}", body.base),
            });
        }

        table_from_codes(base, body.rates)
    }
}
