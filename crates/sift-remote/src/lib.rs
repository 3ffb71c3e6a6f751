//! Remote plumbing for brokerage list views: multi-provider exchange
//! rates with a static fallback table, and withdrawal status polling.

#![warn(unreachable_pub)]

pub mod config;
pub mod currency;
pub mod error;
pub mod poll;
pub mod rates;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::RemoteConfig,
        currency::Currency,
        error::{CurrencyError, PollError, ProviderError, RatesError},
        poll::{PollStep, StatusSource, StatusTracker, WithdrawalStatus, watch},
        rates::{
            RateTable,
            provider::RateProvider,
            service::RateService,
            store::{MemoryStore, RateStore},
        },
    };
}
