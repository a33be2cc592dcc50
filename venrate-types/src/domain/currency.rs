//! Currency code newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Short identifier for a fiat currency or a tradable asset (`USD`, `VES`, `USDT`).
///
/// Always trimmed and upper-cased, never empty. The sources match these codes
/// literally against their payloads, so normalization happens once here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses a currency code, rejecting blank input.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(ValidationError::BlankCurrency);
        }
        Ok(Self(code.to_uppercase()))
    }

    /// Builds a code from a compile-time literal such as a source default.
    pub fn from_static(code: &'static str) -> Self {
        debug_assert!(!code.trim().is_empty(), "static currency code is blank");
        Self(code.trim().to_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
