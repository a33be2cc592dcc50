//! Source registry and dispatcher.
//!
//! Maps source names to adapters and owns the transport they share.

use std::collections::BTreeMap;

use tracing::debug;
use venrate_types::{
    RateError, RateQuery, RateResult, RateSource, SourceConfig, SourceId, Transport,
    ValidationError,
};

use crate::adapters::{CentralBankSource, MessageFeedSource, P2PMarketSource, RateApiSource};

/// Uniform entry point over every registered source.
///
/// Generic over `T: Transport` - the HTTP client is injected at compile time,
/// so tests swap in a mock without touching the adapters.
///
/// Lookups take `&mut self`: a live fetch rewrites the adapter's cache slot.
pub struct SourceRegistry<T: Transport> {
    transport: T,
    sources: BTreeMap<SourceId, Box<dyn RateSource>>,
}

impl<T: Transport> SourceRegistry<T> {
    /// Creates a registry with all four sources at their default endpoints.
    pub fn new(transport: T) -> Self {
        Self::empty(transport)
            .with_source(CentralBankSource::new())
            .with_source(P2PMarketSource::new())
            .with_source(RateApiSource::new())
            .with_source(MessageFeedSource::new())
    }

    /// Creates a registry with no sources.
    pub fn empty(transport: T) -> Self {
        Self {
            transport,
            sources: BTreeMap::new(),
        }
    }

    /// Registers `source`, replacing any adapter with the same id.
    pub fn register(&mut self, source: impl RateSource + 'static) -> Option<Box<dyn RateSource>> {
        self.sources.insert(source.id(), Box::new(source))
    }

    pub fn with_source(mut self, source: impl RateSource + 'static) -> Self {
        self.register(source);
        self
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<SourceId> {
        self.sources.keys().copied().collect()
    }

    pub fn configs(&self) -> impl Iterator<Item = &SourceConfig> {
        self.sources.values().map(|source| source.config())
    }

    /// Fetches one rate from the named source. The name is case-insensitive.
    pub async fn get_rate(
        &mut self,
        source: &str,
        query: &RateQuery,
    ) -> Result<RateResult, RateError> {
        let adapter = lookup(&mut self.sources, source)?;
        debug!(source = %adapter.id(), cached = query.use_cached, "Dispatching rate query");
        adapter.fetch_rate(query, &self.transport).await
    }

    /// Fetches every currency the named source publishes in one response.
    ///
    /// Only the first lookup may hit the network; the rest replay the cache
    /// slot it filled. `query.currency_to` is ignored. Stops at the first failure.
    pub async fn get_rates(
        &mut self,
        source: &str,
        query: &RateQuery,
    ) -> Result<Vec<RateResult>, RateError> {
        let adapter = lookup(&mut self.sources, source)?;
        let currencies = adapter.config().known_currencies.clone();

        let mut rates = Vec::with_capacity(currencies.len());
        for (i, currency) in currencies.iter().enumerate() {
            let query = RateQuery {
                currency_to: Some(currency.to_string()),
                use_cached: query.use_cached || i > 0,
                ..query.clone()
            };
            rates.push(adapter.fetch_rate(&query, &self.transport).await?);
        }
        Ok(rates)
    }
}

fn lookup<'a>(
    sources: &'a mut BTreeMap<SourceId, Box<dyn RateSource>>,
    attempted: &str,
) -> Result<&'a mut Box<dyn RateSource>, ValidationError> {
    let valid: Vec<SourceId> = sources.keys().copied().collect();

    attempted
        .parse::<SourceId>()
        .ok()
        .and_then(|id| sources.get_mut(&id))
        .ok_or_else(|| ValidationError::UnknownSource {
            attempted: attempted.to_string(),
            valid,
        })
}
