//! Source adapter unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use venrate_types::{
        DEFAULT_TIMEOUT, ExtractionError, HttpMethod, RateError, RateQuery, RateSource, SourceId,
        TransportError, TransportOptions, ValidationError,
    };

    use crate::fixtures::{BCV_HTML, BINANCE_JSON, MONITOR_FEED_HTML, YADIO_JSON};
    use crate::mock::MockTransport;
    use crate::{CentralBankSource, MessageFeedSource, P2PMarketSource, RateApiSource};

    // ─────────────────────────────────────────────────────────────────────────────
    // Live fetches
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_central_bank_live_fetch() {
        let transport = MockTransport::with_body(BCV_HTML);
        let mut source = CentralBankSource::new();

        let rate = source
            .fetch_rate(&RateQuery::new().to_currency("eur"), &transport)
            .await
            .unwrap();

        assert_eq!(rate.value(), 40.60419933);
        assert_eq!(rate.source, SourceId::Bcv);
        assert_eq!(rate.currency_from.as_str(), "VES");
        assert_eq!(rate.currency_to.as_str(), "EUR");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].url, "https://www.bcv.org.ve");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_p2p_market_live_fetch() {
        let transport = MockTransport::with_body(BINANCE_JSON);
        let mut source = P2PMarketSource::new();

        let rate = source
            .fetch_rate(&RateQuery::new(), &transport)
            .await
            .unwrap();
        assert_eq!(rate.value(), 37.0358);
        assert_eq!(rate.currency_to.as_str(), "USDT");

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        let payload = request.body.as_ref().unwrap();
        assert_eq!(payload["fiat"], "VES");
        assert_eq!(payload["asset"], "USDT");
        assert_eq!(payload["classifies"][2], "fiat_trade");
    }

    #[tokio::test]
    async fn test_p2p_market_payload_follows_query() {
        let transport = MockTransport::with_body(BINANCE_JSON);
        let mut source = P2PMarketSource::new();

        source
            .fetch_rate(
                &RateQuery::new().from_currency("cop").to_currency("btc"),
                &transport,
            )
            .await
            .unwrap();

        let payload = transport.requests()[0].body.clone().unwrap();
        assert_eq!(payload["fiat"], "COP");
        assert_eq!(payload["asset"], "BTC");
    }

    #[tokio::test]
    async fn test_rate_api_live_fetch() {
        let transport = MockTransport::with_body(YADIO_JSON);
        let mut source = RateApiSource::new();

        let rate = source
            .fetch_rate(&RateQuery::new().to_currency("usd"), &transport)
            .await
            .unwrap();
        assert_eq!(rate.value(), 0.0270009);
        assert_eq!(
            transport.requests()[0].url,
            "https://api.yadio.io/rate/VES/USD"
        );
    }

    #[tokio::test]
    async fn test_rate_api_error_body() {
        let transport = MockTransport::with_body(r#"{"error": "Invalid currency"}"#);
        let mut source = RateApiSource::new();

        let err = source
            .fetch_rate(&RateQuery::new().to_currency("XYZ"), &transport)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RateError::Extraction(ExtractionError::ApiError("Invalid currency".into()))
        );
    }

    #[tokio::test]
    async fn test_message_feed_live_fetch() {
        let transport = MockTransport::with_body(MONITOR_FEED_HTML);
        let mut source = MessageFeedSource::new();

        let rate = source
            .fetch_rate(&RateQuery::new(), &transport)
            .await
            .unwrap();
        assert_eq!(rate.value(), 99.99);
        assert_eq!(
            transport.requests()[0].url,
            "https://t.me/s/enparalelovzlatelegram"
        );
    }

    #[tokio::test]
    async fn test_identical_live_fetches_are_idempotent() {
        let transport = MockTransport::with_body(BCV_HTML);
        let mut source = CentralBankSource::new();
        let query = RateQuery::new().to_currency("USD");

        let first = source.fetch_rate(&query, &transport).await.unwrap();
        let second = source.fetch_rate(&query, &transport).await.unwrap();

        assert_eq!(first.value(), second.value());
        assert_eq!(transport.calls(), 2);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cache slot
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_replay_without_prior_fetch_never_hits_transport() {
        let transport = MockTransport::with_body(BCV_HTML);
        let mut bcv = CentralBankSource::new();
        let mut binance = P2PMarketSource::new();
        let mut yadio = RateApiSource::new();
        let mut feed = MessageFeedSource::new();
        let query = RateQuery::new().cached(true);

        assert_eq!(
            bcv.fetch_rate(&query, &transport).await.unwrap_err(),
            RateError::CacheEmpty(SourceId::Bcv)
        );
        assert_eq!(
            binance.fetch_rate(&query, &transport).await.unwrap_err(),
            RateError::CacheEmpty(SourceId::Binance)
        );
        assert_eq!(
            yadio.fetch_rate(&query, &transport).await.unwrap_err(),
            RateError::CacheEmpty(SourceId::Yadio)
        );
        assert_eq!(
            feed.fetch_rate(&query, &transport).await.unwrap_err(),
            RateError::CacheEmpty(SourceId::MonitorDolar)
        );
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_replay_reuses_last_live_body() {
        let transport = MockTransport::with_body(BCV_HTML);
        let mut source = CentralBankSource::new();

        let live = source
            .fetch_rate(&RateQuery::new().to_currency("USD"), &transport)
            .await
            .unwrap();
        let replayed = source
            .fetch_rate(&RateQuery::new().to_currency("EUR").cached(true), &transport)
            .await
            .unwrap();

        assert_eq!(live.value(), 37.0358);
        assert_eq!(replayed.value(), 40.60419933);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_live_body_is_cached_even_when_extraction_fails() {
        let transport = MockTransport::new();
        transport.push_response(200, "<html>maintenance</html>");
        let mut source = CentralBankSource::new();

        let err = source
            .fetch_rate(&RateQuery::new(), &transport)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RateError::Extraction(ExtractionError::CurrencyMarkerNotFound { .. })
        ));
        assert_eq!(
            source.cache().get().unwrap().body,
            "<html>maintenance</html>"
        );

        let replayed = source
            .fetch_rate(&RateQuery::new().cached(true), &transport)
            .await
            .unwrap_err();
        assert_eq!(replayed, err);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_newer_live_fetch_overwrites_slot() {
        let transport = MockTransport::new();
        transport.push_response(200, "<span>USD</span><strong>36,00</strong>");
        transport.push_response(200, "<span>USD</span><strong>37,50</strong>");
        let mut source = CentralBankSource::new();

        source.fetch_rate(&RateQuery::new(), &transport).await.unwrap();
        source.fetch_rate(&RateQuery::new(), &transport).await.unwrap();
        let replayed = source
            .fetch_rate(&RateQuery::new().cached(true), &transport)
            .await
            .unwrap();

        assert_eq!(replayed.value(), 37.5);
    }

    #[tokio::test]
    async fn test_rate_api_replay_for_other_pair_is_rejected() {
        let transport = MockTransport::with_body(YADIO_JSON);
        let mut source = RateApiSource::new();

        source
            .fetch_rate(&RateQuery::new().to_currency("USD"), &transport)
            .await
            .unwrap();
        let err = source
            .fetch_rate(&RateQuery::new().to_currency("EUR").cached(true), &transport)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RateError::CacheMismatch {
                source_id: SourceId::Yadio,
                ref cached_to,
                ref to,
                ..
            } if cached_to.as_str() == "USD" && to.as_str() == "EUR"
        ));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_p2p_market_replay_for_other_pair_is_rejected() {
        let transport = MockTransport::with_body(BINANCE_JSON);
        let mut source = P2PMarketSource::new();

        source.fetch_rate(&RateQuery::new(), &transport).await.unwrap();
        let err = source
            .fetch_rate(&RateQuery::new().to_currency("BTC").cached(true), &transport)
            .await
            .unwrap_err();
        assert!(matches!(err, RateError::CacheMismatch { .. }));

        // Same pair still replays.
        let replayed = source
            .fetch_rate(&RateQuery::new().to_currency("usdt").cached(true), &transport)
            .await
            .unwrap();
        assert_eq!(replayed.value(), 37.0358);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_message_feed_replays_for_any_pair() {
        let transport = MockTransport::with_body(MONITOR_FEED_HTML);
        let mut source = MessageFeedSource::new();

        let live = source.fetch_rate(&RateQuery::new(), &transport).await.unwrap();
        let replayed = source
            .fetch_rate(&RateQuery::new().to_currency("EUR").cached(true), &transport)
            .await
            .unwrap();

        assert_eq!(replayed.value(), live.value());
        assert_eq!(transport.calls(), 1);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Validation and transport failures
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_blank_currency_fails_before_transport() {
        let transport = MockTransport::with_body(BCV_HTML);
        let mut source = CentralBankSource::new();

        let err = source
            .fetch_rate(&RateQuery::new().to_currency("  "), &transport)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RateError::Validation(ValidationError::MissingCurrency {
                from: String::new(),
                to: "  ".into(),
            })
        );

        let mut feed = MessageFeedSource::new();
        let err = feed
            .fetch_rate(&RateQuery::new().from_currency("").cached(true), &transport)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RateError::Validation(ValidationError::MissingCurrency { .. })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_error_status_is_transport_failure() {
        let transport = MockTransport::new();
        transport.push_response(503, "Service Unavailable");
        let mut source = RateApiSource::new();

        let err = source
            .fetch_rate(&RateQuery::new(), &transport)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RateError::Transport(TransportError::Status {
                url: "https://api.yadio.io/rate/VES/USD".into(),
                status: 503,
            })
        );
        assert!(source.cache().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unchanged() {
        let transport = MockTransport::new();
        let failure = TransportError::Request {
            url: "https://t.me/s/enparalelovzlatelegram".into(),
            message: "operation timed out".into(),
        };
        transport.push_error(failure.clone());
        let mut source = MessageFeedSource::new();

        let err = source
            .fetch_rate(&RateQuery::new(), &transport)
            .await
            .unwrap_err();
        assert_eq!(err, RateError::Transport(failure));
        assert_eq!(transport.calls(), 1);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Overrides and options
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_method_and_url_overrides_reach_transport() {
        let transport = MockTransport::with_body(BCV_HTML);
        let mut source = CentralBankSource::new();
        let query = RateQuery::new()
            .with_method(HttpMethod::Post)
            .with_url("http://127.0.0.1:9000/stub");

        source.fetch_rate(&query, &transport).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://127.0.0.1:9000/stub");
        assert_eq!(source.config().default_url_template, "https://www.bcv.org.ve");
    }

    #[tokio::test]
    async fn test_default_timeout_is_filled_in() {
        let transport = MockTransport::with_body(YADIO_JSON);
        let mut source = RateApiSource::new();

        source.fetch_rate(&RateQuery::new(), &transport).await.unwrap();
        let options = TransportOptions::default()
            .with_timeout(Duration::from_secs(3))
            .insecure(true);
        source
            .fetch_rate(&RateQuery::new().with_options(options.clone()), &transport)
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].options.timeout, Some(DEFAULT_TIMEOUT));
        assert_eq!(requests[1].options, options);
    }
}
