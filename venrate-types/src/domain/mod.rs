//! Domain models for rate retrieval.

pub mod currency;
pub mod rate;
pub mod source;

pub use currency::CurrencyCode;
pub use rate::{RateQuery, RateResult};
pub use source::{DEFAULT_TIMEOUT, HttpMethod, SourceConfig, SourceId};
