//! Source identifiers and per-source transport defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use super::currency::CurrencyCode;

/// Timeout applied when the caller does not supply one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Known rate sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceId {
    /// Banco Central de Venezuela homepage.
    Bcv,
    /// Binance P2P advertisement search.
    Binance,
    /// Yadio public rate API.
    Yadio,
    /// MonitorDolar Telegram channel preview.
    MonitorDolar,
}

impl SourceId {
    pub fn all() -> &'static [SourceId] {
        &[
            SourceId::Bcv,
            SourceId::Binance,
            SourceId::Yadio,
            SourceId::MonitorDolar,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Bcv => "BCV",
            SourceId::Binance => "BINANCE",
            SourceId::Yadio => "YADIO",
            SourceId::MonitorDolar => "MONITORDOLAR",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceId {
    type Err = String;

    /// Case-insensitive lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        SourceId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| format!("Unknown source: {}", s))
    }
}

/// HTTP verb a source is queried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(format!("Unsupported HTTP method: {}", s)),
        }
    }
}

/// Transport defaults for one source.
///
/// Built once per adapter and never mutated afterwards. Callers that need to
/// point a source elsewhere use the per-query overrides instead.
#[derive(Debug, Clone, Serialize)]
pub struct SourceConfig {
    pub source_id: SourceId,
    pub default_method: HttpMethod,
    /// Base URL. Each adapter decides how currencies are spliced into it.
    pub default_url_template: String,
    pub default_currency_from: CurrencyCode,
    pub default_currency_to: CurrencyCode,
    /// JSON body sent with every request, if the source takes one.
    pub default_payload_template: Option<Value>,
    #[serde(with = "duration_secs")]
    pub default_timeout: Duration,
    /// Currencies a single response from this source carries.
    pub known_currencies: Vec<CurrencyCode>,
    /// A response only answers the pair it was requested for, so a cached
    /// body cannot be replayed for another pair.
    pub pair_specific: bool,
}

mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }
}
