//! # Venrate Client
//!
//! The `Transport` port implemented with `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method};
use tracing::debug;
use venrate_types::{HttpMethod, Transport, TransportError, TransportRequest, TransportResponse};

const USER_AGENT: &str = concat!("venrate/", env!("CARGO_PKG_VERSION"));

/// Error type for client construction.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP transport for the rate sources.
///
/// Any status outside 2xx is reported as [`TransportError::Status`]; nothing
/// is retried.
pub struct HttpTransport {
    http: Client,
    insecure: Client,
}

impl HttpTransport {
    /// Creates a new transport.
    pub fn new() -> Result<Self, ClientError> {
        Ok(Self {
            http: Self::builder().build()?,
            insecure: Self::builder().danger_accept_invalid_certs(true).build()?,
        })
    }

    fn builder() -> ClientBuilder {
        Client::builder().user_agent(USER_AGENT)
    }

    fn client(&self, accept_invalid_certs: bool) -> &Client {
        if accept_invalid_certs {
            &self.insecure
        } else {
            &self.http
        }
    }
}

fn request_error(url: &str, err: reqwest::Error) -> TransportError {
    TransportError::Request {
        url: url.to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let TransportRequest {
            method,
            url,
            body,
            options,
        } = request;

        let method = match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut req = self
            .client(options.accept_invalid_certs)
            .request(method.clone(), &url);
        if let Some(timeout) = options.timeout {
            req = req.timeout(timeout);
        }
        for (name, value) in &options.headers {
            req = req.header(name, value);
        }
        if let Some(body) = &body {
            req = req.json(body);
        }

        debug!(%method, %url, "Sending request");
        let resp = req.send().await.map_err(|e| request_error(&url, e))?;

        let status = resp.status();
        debug!(%url, status = status.as_u16(), "Received response");
        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| request_error(&url, e))?;
        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}
