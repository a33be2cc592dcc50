//! Yadio public rate API.

use async_trait::async_trait;
use venrate_types::{
    CurrencyCode, DEFAULT_TIMEOUT, HttpMethod, RateError, RateQuery, RateResult, RateSource,
    SourceConfig, SourceId, Transport, TransportRequest,
};

use super::{finish, load_body, resolve_currencies, target, transport_options};
use crate::cache::ResponseCache;
use crate::extract::{Extractor, PassthroughExtractor};

pub const YADIO_URL: &str = "https://api.yadio.io";

/// Rate lookup against `{base}/rate/{from}/{to}`.
///
/// A URL override replaces the base; the path segments are still appended.
#[derive(Debug)]
pub struct RateApiSource {
    config: SourceConfig,
    cache: ResponseCache,
    extractor: PassthroughExtractor,
}

impl RateApiSource {
    pub fn new() -> Self {
        Self::with_url(YADIO_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            config: SourceConfig {
                source_id: SourceId::Yadio,
                default_method: HttpMethod::Get,
                default_url_template: url.into(),
                default_currency_from: CurrencyCode::from_static("VES"),
                default_currency_to: CurrencyCode::from_static("USD"),
                default_payload_template: None,
                default_timeout: DEFAULT_TIMEOUT,
                known_currencies: vec![CurrencyCode::from_static("USD")],
                pair_specific: true,
            },
            cache: ResponseCache::new(),
            extractor: PassthroughExtractor,
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    fn request(
        &self,
        query: &RateQuery,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> TransportRequest {
        let (method, base) = target(&self.config, query);
        TransportRequest {
            method,
            url: format!("{}/rate/{}/{}", base.trim_end_matches('/'), from, to),
            body: None,
            options: transport_options(&self.config, query),
        }
    }
}

impl Default for RateApiSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for RateApiSource {
    fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn fetch_rate(
        &mut self,
        query: &RateQuery,
        transport: &dyn Transport,
    ) -> Result<RateResult, RateError> {
        let (from, to) = resolve_currencies(&self.config, query)?;
        let request = self.request(query, &from, &to);

        let body = load_body(
            &self.config,
            &mut self.cache,
            query.use_cached,
            (&from, &to),
            transport,
            request,
        )
        .await?;

        let extracted = self.extractor.extract(body, &to);
        finish(&self.config, extracted, from, to)
    }
}
