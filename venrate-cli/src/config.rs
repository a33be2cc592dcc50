//! Configuration loading from environment.

use std::env;

use venrate_client::HttpTransport;
use venrate_sources::adapters::{BCV_URL, BINANCE_P2P_URL, MONITOR_DOLAR_URL, YADIO_URL};
use venrate_sources::{
    CentralBankSource, MessageFeedSource, P2PMarketSource, RateApiSource, SourceRegistry,
};

/// Source endpoints, overridable for mirrors and local stubs.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bcv_url: String,
    pub binance_url: String,
    pub yadio_url: String,
    pub monitor_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            bcv_url: url("VENRATE_BCV_URL", BCV_URL),
            binance_url: url("VENRATE_BINANCE_URL", BINANCE_P2P_URL),
            yadio_url: url("VENRATE_YADIO_URL", YADIO_URL),
            monitor_url: url("VENRATE_MONITOR_URL", MONITOR_DOLAR_URL),
        }
    }

    /// Builds a registry with every source pointed at its configured endpoint.
    pub fn registry(&self, transport: HttpTransport) -> SourceRegistry<HttpTransport> {
        SourceRegistry::empty(transport)
            .with_source(CentralBankSource::with_url(&self.bcv_url))
            .with_source(P2PMarketSource::with_url(&self.binance_url))
            .with_source(RateApiSource::with_url(&self.yadio_url))
            .with_source(MessageFeedSource::with_url(&self.monitor_url))
    }
}
