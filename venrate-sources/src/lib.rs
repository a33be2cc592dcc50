//! # Venrate Sources
//!
//! Rate extraction for Venezuelan bolívar exchange rates published by
//! sources that were never meant to be read by machines.
//!
//! ## Architecture
//!
//! - `extract/` - Pure body parsers, one per response shape
//! - `cache` - Single-slot memo of each source's last live response
//! - `adapters/` - One `RateSource` per source: transport defaults + cache + extractor
//! - `registry` - Name-based dispatch over the adapters
//!
//! # Example
//!
//! ```ignore
//! use venrate_sources::SourceRegistry;
//! use venrate_types::RateQuery;
//!
//! let mut registry = SourceRegistry::new(transport);
//! let rate = registry.get_rate("bcv", &RateQuery::new().to_currency("EUR")).await?;
//!
//! // Same page, no second request
//! let usd = registry
//!     .get_rate("BCV", &RateQuery::new().to_currency("USD").cached(true))
//!     .await?;
//! ```

pub mod adapters;
pub mod cache;
pub mod extract;
pub mod registry;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod adapter_tests;

pub use adapters::{CentralBankSource, MessageFeedSource, P2PMarketSource, RateApiSource};
pub use cache::{CachedResponse, ResponseCache};
pub use extract::{
    Extractor, FeedMessageExtractor, HtmlTagExtractor, JsonPriceExtractor, PassthroughExtractor,
};
pub use registry::SourceRegistry;
