//! Error types for rate retrieval.
//!
//! None of these are retried anywhere in the core. Adapters and the registry
//! return them unchanged, wrapped in [`RateError`].

use crate::domain::{CurrencyCode, SourceId};

/// Input rejected before any network call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Currency code must not be empty")]
    BlankCurrency,

    #[error("Currency from '{from}' and currency to '{to}' must not be empty")]
    MissingCurrency { from: String, to: String },

    #[error("Source '{attempted}' not in {}", format_ids(.valid))]
    UnknownSource {
        attempted: String,
        valid: Vec<SourceId>,
    },
}

fn format_ids(ids: &[SourceId]) -> String {
    let names: Vec<&str> = ids.iter().map(SourceId::as_str).collect();
    format!("[{}]", names.join(", "))
}

/// Opaque failure surfaced by the transport collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Why a response body could not yield a rate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    #[error("Couldn't find <span>{currency}</span>, has the page changed?")]
    CurrencyMarkerNotFound { currency: String },

    #[error("Couldn't find opening tag {marker} of {currency}, has the page changed?")]
    OpeningMarkerNotFound { currency: String, marker: &'static str },

    #[error("Couldn't find closing tag {marker} of {currency}, has the page changed?")]
    ClosingMarkerNotFound { currency: String, marker: &'static str },

    #[error("No price (empty) found {context}")]
    EmptyValue { context: &'static str },

    #[error("Couldn't convert price '{raw}' to a number")]
    UnparsableValue { raw: String },

    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Request failed or returned no data: {body}")]
    RequestRejected { body: String },

    #[error("Field '{field}' missing from response")]
    FieldMissing { field: &'static str },

    #[error("Rate API error: {0}")]
    ApiError(String),

    #[error("Rate format not found anywhere in the feed, has the channel format changed?")]
    FormatNotFound,

    #[error("Rate must be a positive number, got {0}")]
    InvalidValue(f64),
}

/// Umbrella error returned by adapters and the registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("No cached response for {0}, fetch it live first")]
    CacheEmpty(SourceId),

    #[error(
        "Cached {source_id} response answers {cached_from}/{cached_to}, not {from}/{to}, fetch it live"
    )]
    CacheMismatch {
        source_id: SourceId,
        cached_from: CurrencyCode,
        cached_to: CurrencyCode,
        from: CurrencyCode,
        to: CurrencyCode,
    },
}
