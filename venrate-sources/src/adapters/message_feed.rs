//! MonitorDolar announcements from the channel's public web preview.

use async_trait::async_trait;
use venrate_types::{
    CurrencyCode, DEFAULT_TIMEOUT, HttpMethod, RateError, RateQuery, RateResult, RateSource,
    SourceConfig, SourceId, Transport, TransportRequest,
};

use super::{finish, load_body, resolve_currencies, target, transport_options};
use crate::cache::ResponseCache;
use crate::extract::{Extractor, FeedMessageExtractor};

pub const MONITOR_DOLAR_URL: &str = "https://t.me/s/enparalelovzlatelegram";

/// Parallel-market dollar rate announced on a Telegram channel.
///
/// The channel only announces one rate, so currencies are validated but do
/// not change the request.
#[derive(Debug)]
pub struct MessageFeedSource {
    config: SourceConfig,
    cache: ResponseCache,
    extractor: FeedMessageExtractor,
}

impl MessageFeedSource {
    pub fn new() -> Self {
        Self::with_url(MONITOR_DOLAR_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            config: SourceConfig {
                source_id: SourceId::MonitorDolar,
                default_method: HttpMethod::Get,
                default_url_template: url.into(),
                default_currency_from: CurrencyCode::from_static("VES"),
                default_currency_to: CurrencyCode::from_static("USD"),
                default_payload_template: None,
                default_timeout: DEFAULT_TIMEOUT,
                known_currencies: vec![CurrencyCode::from_static("USD")],
                pair_specific: false,
            },
            cache: ResponseCache::new(),
            extractor: FeedMessageExtractor,
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    fn request(&self, query: &RateQuery) -> TransportRequest {
        let (method, url) = target(&self.config, query);
        TransportRequest {
            method,
            url,
            body: None,
            options: transport_options(&self.config, query),
        }
    }
}

impl Default for MessageFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for MessageFeedSource {
    fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn fetch_rate(
        &mut self,
        query: &RateQuery,
        transport: &dyn Transport,
    ) -> Result<RateResult, RateError> {
        let (from, to) = resolve_currencies(&self.config, query)?;
        let request = self.request(query);

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
