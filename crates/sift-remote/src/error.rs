use thiserror::Error as ThisError;

///
/// CurrencyError
///

#[derive(Debug, ThisError)]
pub enum CurrencyError {
    #[error("invalid currency code: {code:?}")]
    Invalid { code: String },
}

///
/// ProviderError
///
/// One provider's failure to produce a rate table. The service treats
/// every variant the same way: log and move to the next provider.
///

#[derive(Debug, ThisError)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider did not answer within {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("response missing rates for base {base}")]
    MissingBase { base: String },
}

///
/// RatesError
///

#[derive(Debug, ThisError)]
pub enum RatesError {
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    #[error("no rates available for {base}: all {attempted} providers failed and no fallback")]
    Exhausted { base: String, attempted: usize },
}

///
/// PollError
///

#[derive(Debug, ThisError)]
pub enum PollError {
    #[error("status source error: {message}")]
    Source { message: String },

    #[error("status still unsettled after {attempts} polls")]
    AttemptsExhausted { attempts: u32 },
}
