//! Rate queries and results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::CurrencyCode;
use super::source::{HttpMethod, SourceId};
use crate::error::ExtractionError;
use crate::ports::TransportOptions;

/// A successfully extracted exchange rate.
///
/// `value` is always finite and strictly positive; a missing rate is an error,
/// never a sentinel number. Deserialization goes through [`RateResult::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRateResult")]
pub struct RateResult {
    value: f64,
    pub source: SourceId,
    pub currency_from: CurrencyCode,
    pub currency_to: CurrencyCode,
}

impl RateResult {
    /// Creates a result, rejecting non-positive and non-finite values.
    pub fn new(
        value: f64,
        source: SourceId,
        currency_from: CurrencyCode,
        currency_to: CurrencyCode,
    ) -> Result<Self, ExtractionError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ExtractionError::InvalidValue(value));
        }
        Ok(Self {
            value,
            source,
            currency_from,
            currency_to,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Deserialize)]
struct RawRateResult {
    value: f64,
    source: SourceId,
    currency_from: CurrencyCode,
    currency_to: CurrencyCode,
}

impl TryFrom<RawRateResult> for RateResult {
    type Error = ExtractionError;

    fn try_from(raw: RawRateResult) -> Result<Self, Self::Error> {
        Self::new(raw.value, raw.source, raw.currency_from, raw.currency_to)
    }
}

impl fmt::Display for RateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One rate lookup request.
///
/// Absent currencies fall back to the source's configured defaults; present
/// ones must not be blank. `method` and `url` override the source's transport
/// defaults for this call only.
#[derive(Debug, Clone, Default)]
pub struct RateQuery {
    pub currency_from: Option<String>,
    pub currency_to: Option<String>,
    pub use_cached: bool,
    pub method: Option<HttpMethod>,
    pub url: Option<String>,
    pub transport_options: TransportOptions,
}

impl RateQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency_from = Some(currency.into());
        self
    }

    pub fn to_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency_to = Some(currency.into());
        self
    }

    /// Replays the source's last successful response instead of fetching.
    pub fn cached(mut self, use_cached: bool) -> Self {
        self.use_cached = use_cached;
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_options(mut self, options: TransportOptions) -> Self {
        self.transport_options = options;
        self
    }
}
