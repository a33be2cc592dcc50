//! Transport port.
//!
//! The core never talks HTTP itself. It hands a [`TransportRequest`] to a
//! [`Transport`] and consumes the status and raw body that come back.

use serde_json::Value;
use std::time::Duration;

use crate::domain::HttpMethod;
use crate::error::TransportError;

/// Options forwarded verbatim to the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportOptions {
    pub timeout: Option<Duration>,
    /// Skip TLS certificate verification (the BCV site has shipped broken chains).
    pub accept_invalid_certs: bool,
    pub headers: Vec<(String, String)>,
}

impl TransportOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn insecure(mut self, accept_invalid_certs: bool) -> Self {
        self.accept_invalid_certs = accept_invalid_certs;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A fully resolved request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body, sent only when present.
    pub body: Option<Value>,
    pub options: TransportOptions,
}

/// Raw response handed back to the adapters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues HTTP requests on behalf of the sources.
///
/// Implementations must return `Err` for transport-level failures and for
/// any 4xx/5xx status. The core treats every error as opaque and never retries.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}
