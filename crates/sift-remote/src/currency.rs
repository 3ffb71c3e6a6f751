use crate::error::CurrencyError;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Currency
///
/// ISO 4217 currency code, stored uppercased. Construction validates the
/// three-ASCII-letter shape; serde round-trips through the string form.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl AsRef<str>) -> Result<Self, CurrencyError> {
        let code = code.as_ref().trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::Invalid {
                code: code.to_string(),
            });
        }

        Ok(Self(code.to_ascii_uppercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::new(code)
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uppercases_and_trims() {
        let usd = Currency::new(" usd ").expect("usd should be valid");
        assert_eq!(usd.as_str(), "USD");
    }

    #[test]
    fn new_rejects_malformed_codes() {
        for bad in ["", "US", "USDT", "U1D", "€UR"] {
            assert!(Currency::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn serde_round_trips_through_the_string_form() {
        let eur: Currency = serde_json::from_str(r#""eur""#).expect("eur should parse");
        assert_eq!(eur.as_str(), "EUR");
        assert_eq!(
            serde_json::to_string(&eur).expect("should serialize"),
            r#""EUR""#
        );

        assert!(serde_json::from_str::<Currency>(r#""nope""#).is_err());
    }
}
