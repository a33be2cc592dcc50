//! Body extractors.
//!
//! Each extractor turns a raw response body into a number or a tagged
//! [`ExtractionError`]. They are pure: no IO, no state.

mod feed_message;
mod html_tag;
mod json_price;
mod passthrough;

pub use feed_message::FeedMessageExtractor;
pub use html_tag::HtmlTagExtractor;
pub use json_price::JsonPriceExtractor;
pub use passthrough::PassthroughExtractor;

use venrate_types::{CurrencyCode, ExtractionError};

/// Pulls a rate out of a response body.
pub trait Extractor: Send + Sync {
    fn extract(&self, body: &str, currency: &CurrencyCode) -> Result<f64, ExtractionError>;
}

/// `str::find` starting at byte offset `from`, returning an absolute offset.
pub(crate) fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|rest| rest.find(needle))
        .map(|idx| idx + from)
}

/// Parses a comma-decimal number such as `40,60419933`.
pub(crate) fn parse_comma_decimal(raw: &str) -> Result<f64, ExtractionError> {
    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ExtractionError::UnparsableValue {
            raw: raw.to_string(),
        })
}
