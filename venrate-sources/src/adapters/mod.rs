//! Source adapters.
//!
//! Each adapter owns one source's transport defaults, its own cache slot and
//! its extractor, and exposes them through [`RateSource::fetch_rate`]. The
//! helpers below hold the steps every adapter runs in the same order:
//! validate currencies, load the body (live or replayed), extract, wrap.
//!
//! [`RateSource::fetch_rate`]: venrate_types::RateSource::fetch_rate

mod central_bank;
mod message_feed;
mod p2p_market;
mod rate_api;

pub use central_bank::{BCV_CURRENCIES, BCV_URL, CentralBankSource};
pub use message_feed::{MONITOR_DOLAR_URL, MessageFeedSource};
pub use p2p_market::{BINANCE_P2P_URL, P2PMarketSource};
pub use rate_api::{RateApiSource, YADIO_URL};

use tracing::{debug, warn};
use venrate_types::{
    CurrencyCode, ExtractionError, HttpMethod, RateError, RateQuery, RateResult, SourceConfig,
    Transport, TransportError, TransportOptions, TransportRequest, ValidationError,
};

use crate::cache::ResponseCache;

/// Query currencies, or the source defaults when absent. Blank input fails.
pub(crate) fn resolve_currencies(
    config: &SourceConfig,
    query: &RateQuery,
) -> Result<(CurrencyCode, CurrencyCode), ValidationError> {
    let resolve = |given: &Option<String>, default: &CurrencyCode| match given {
        Some(code) => CurrencyCode::new(code),
        None => Ok(default.clone()),
    };

    match (
        resolve(&query.currency_from, &config.default_currency_from),
        resolve(&query.currency_to, &config.default_currency_to),
    ) {
        (Ok(from), Ok(to)) => Ok((from, to)),
        _ => Err(ValidationError::MissingCurrency {
            from: query.currency_from.clone().unwrap_or_default(),
            to: query.currency_to.clone().unwrap_or_default(),
        }),
    }
}

/// Method and URL template for this call, after per-query overrides.
pub(crate) fn target(config: &SourceConfig, query: &RateQuery) -> (HttpMethod, String) {
    (
        query.method.unwrap_or(config.default_method),
        query
            .url
            .clone()
            .unwrap_or_else(|| config.default_url_template.clone()),
    )
}

/// Caller options with the source's default timeout filled in.
pub(crate) fn transport_options(config: &SourceConfig, query: &RateQuery) -> TransportOptions {
    let mut options = query.transport_options.clone();
    options.timeout.get_or_insert(config.default_timeout);
    options
}

/// Returns the body to extract from: the cache slot when `use_cached`,
/// otherwise a fresh response, which is stored in the slot first.
///
/// Pair-specific sources only replay a body fetched for the same pair.
pub(crate) async fn load_body<'a>(
    config: &SourceConfig,
    cache: &'a mut ResponseCache,
    use_cached: bool,
    (from, to): (&CurrencyCode, &CurrencyCode),
    transport: &dyn Transport,
    request: TransportRequest,
) -> Result<&'a str, RateError> {
    let source = config.source_id;

    if use_cached {
        return match cache.get() {
            Some(cached)
                if config.pair_specific
                    && (&cached.currency_from, &cached.currency_to) != (from, to) =>
            {
                debug!(
                    source = %source,
                    cached_from = %cached.currency_from,
                    cached_to = %cached.currency_to,
                    from = %from,
                    to = %to,
                    "Cached response is for another pair"
                );
                Err(RateError::CacheMismatch {
                    source_id: source,
                    cached_from: cached.currency_from.clone(),
                    cached_to: cached.currency_to.clone(),
                    from: from.clone(),
                    to: to.clone(),
                })
            }
            Some(cached) => {
                debug!(
                    source = %source,
                    fetched_at = %cached.fetched_at,
                    "Replaying cached response"
                );
                Ok(cached.body.as_str())
            }
            None => {
                debug!(source = %source, "Cache miss on replay");
                Err(RateError::CacheEmpty(source))
            }
        };
    }

    debug!(
        source = %source,
        method = %request.method,
        url = %request.url,
        "Fetching live response"
    );
    let url = request.url.clone();
    let response = transport.send(request).await.inspect_err(|e| {
        warn!(source = %source, error = %e, "Transport failed");
    })?;

    if !response.is_success() {
        warn!(source = %source, status = response.status, "Non-success status");
        return Err(TransportError::Status {
            url,
            status: response.status,
        }
        .into());
    }

    Ok(cache.store(response.body, from, to))
}

/// Wraps an extracted number, logging extraction failures on the way out.
pub(crate) fn finish(
    config: &SourceConfig,
    extracted: Result<f64, ExtractionError>,
    currency_from: CurrencyCode,
    currency_to: CurrencyCode,
) -> Result<RateResult, RateError> {
    let source = config.source_id;
    let rate = extracted
        .and_then(|value| RateResult::new(value, source, currency_from, currency_to))
        .inspect_err(|e| warn!(source = %source, error = %e, "Extraction failed"))?;

    debug!(source = %source, rate = rate.value(), "Extracted rate");
    Ok(rate)
}
