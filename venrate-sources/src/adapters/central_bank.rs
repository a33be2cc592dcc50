//! Banco Central de Venezuela homepage.

use async_trait::async_trait;
use venrate_types::{
    CurrencyCode, DEFAULT_TIMEOUT, HttpMethod, RateError, RateQuery, RateResult, RateSource,
    SourceConfig, SourceId, Transport, TransportRequest,
};

use super::{finish, load_body, resolve_currencies, target, transport_options};
use crate::cache::ResponseCache;
use crate::extract::{Extractor, HtmlTagExtractor};

pub const BCV_URL: &str = "https://www.bcv.org.ve";

/// Currencies published on the BCV homepage.
pub const BCV_CURRENCIES: [&str; 5] = ["EUR", "CNY", "TRY", "RUB", "USD"];

/// Official rates scraped from the BCV homepage.
///
/// The page lists every currency at once, so the URL is used as-is and the
/// currency only matters to the extractor.
#[derive(Debug)]
pub struct CentralBankSource {
    config: SourceConfig,
    cache: ResponseCache,
    extractor: HtmlTagExtractor,
}

impl CentralBankSource {
    pub fn new() -> Self {
        Self::with_url(BCV_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            config: SourceConfig {
                source_id: SourceId::Bcv,
                default_method: HttpMethod::Get,
                default_url_template: url.into(),
                default_currency_from: CurrencyCode::from_static("VES"),
                default_currency_to: CurrencyCode::from_static("USD"),
                default_payload_template: None,
                default_timeout: DEFAULT_TIMEOUT,
                known_currencies: BCV_CURRENCIES
                    .into_iter()
                    .map(CurrencyCode::from_static)
                    .collect(),
                pair_specific: false,
            },
            cache: ResponseCache::new(),
            extractor: HtmlTagExtractor,
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

impl Default for CentralBankSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for CentralBankSource {
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
