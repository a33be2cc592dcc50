//! Binance P2P advertisement search.

use async_trait::async_trait;
use serde_json::{Value, json};
use venrate_types::{
    CurrencyCode, DEFAULT_TIMEOUT, HttpMethod, RateError, RateQuery, RateResult, RateSource,
    SourceConfig, SourceId, Transport, TransportRequest,
};

use super::{finish, load_body, resolve_currencies, target, transport_options};
use crate::cache::ResponseCache;
use crate::extract::{Extractor, JsonPriceExtractor};

pub const BINANCE_P2P_URL: &str = "https://p2p.binance.com/bapi/c2c/v2/friendly/c2c/adv/search";

/// Search filters sent with every request. `fiat` and `asset` are overwritten
/// per call with the query's currencies.
fn default_payload() -> Value {
    json!({
        "fiat": "VES",
        "page": 1,
        "rows": 10,
        "order": "trade_count",
        "tradeType": "BUY",
        "asset": "USDT",
        "countries": [],
        "proMerchantAds": false,
        "shieldMerchantAds": false,
        "filterType": "all",
        "periods": [],
        "additionalKycVerifyFilter": 0,
        "publisherType": "merchant",
        "payTypes": [],
        "classifies": ["mass", "profession", "fiat_trade"]
    })
}

/// Price of the top merchant ad on Binance P2P.
#[derive(Debug)]
pub struct P2PMarketSource {
    config: SourceConfig,
    cache: ResponseCache,
    extractor: JsonPriceExtractor,
}

impl P2PMarketSource {
    pub fn new() -> Self {
        Self::with_url(BINANCE_P2P_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            config: SourceConfig {
                source_id: SourceId::Binance,
                default_method: HttpMethod::Post,
                default_url_template: url.into(),
                default_currency_from: CurrencyCode::from_static("VES"),
                default_currency_to: CurrencyCode::from_static("USDT"),
                default_payload_template: Some(default_payload()),
                default_timeout: DEFAULT_TIMEOUT,
                known_currencies: vec![CurrencyCode::from_static("USDT")],
                pair_specific: true,
            },
            cache: ResponseCache::new(),
            extractor: JsonPriceExtractor,
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Fresh copy of the template with the pair filled in.
    fn payload(&self, from: &CurrencyCode, to: &CurrencyCode) -> Value {
        let mut payload = self
            .config
            .default_payload_template
            .clone()
            .unwrap_or_else(default_payload);
        if let Some(filters) = payload.as_object_mut() {
            filters.insert("fiat".into(), Value::String(from.to_string()));
            filters.insert("asset".into(), Value::String(to.to_string()));
        }
        payload
    }

    fn request(
        &self,
        query: &RateQuery,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> TransportRequest {
        let (method, url) = target(&self.config, query);
        TransportRequest {
            method,
            url,
            body: Some(self.payload(from, to)),
            options: transport_options(&self.config, query),
        }
    }
}

impl Default for P2PMarketSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for P2PMarketSource {
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
