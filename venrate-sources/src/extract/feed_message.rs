//! Message-feed extractor.
//!
//! Reads the public web preview of a Telegram channel. Every message sits in
//! a `tgme_widget_message_wrap` block; rate announcements carry
//! `Bs. 45,20<br/>` inside the block's `tgme_widget_message_text` region.
//!
//! The scan walks every block and keeps overwriting the result, so the last
//! matching block in document order wins. Markers found past the next
//! wrapper belong to a later block and make the current block a non-match.

use venrate_types::{CurrencyCode, ExtractionError};

use super::{Extractor, find_from, parse_comma_decimal};

const WRAP_MARKER: &str = "tgme_widget_message_wrap";
const TEXT_MARKER: &str = "tgme_widget_message_text";
const AMOUNT_MARKER: &str = "Bs.";
const LINE_BREAK: &str = "<br/>";

#[derive(Debug, Clone, Copy, Default)]
pub struct FeedMessageExtractor;

impl FeedMessageExtractor {
    /// Rate text of the block starting at `start`, if the block matches.
    fn block_rate_text<'a>(body: &'a str, start: usize, end: Option<usize>) -> Option<&'a str> {
        let inside = |idx: usize| end.is_none_or(|end| idx < end);

        let text_idx = find_from(body, TEXT_MARKER, start).filter(|&i| inside(i))?;
        let amount_idx = find_from(body, AMOUNT_MARKER, text_idx).filter(|&i| inside(i))?;
        let break_idx = find_from(body, LINE_BREAK, amount_idx).filter(|&i| inside(i))?;

        Some(&body[amount_idx + AMOUNT_MARKER.len()..break_idx])
    }
}

impl Extractor for FeedMessageExtractor {
    fn extract(&self, body: &str, _currency: &CurrencyCode) -> Result<f64, ExtractionError> {
        let mut rate = None;
        let mut cursor = 0;

        while let Some(start) = find_from(body, WRAP_MARKER, cursor) {
            cursor = start + WRAP_MARKER.len();
            let end = find_from(body, WRAP_MARKER, cursor);

            let Some(raw) = Self::block_rate_text(body, start, end) else {
                continue;
            };

            let raw = raw.trim();
            if raw.is_empty() {
                return Err(ExtractionError::EmptyValue {
                    context: "between Bs. and <br/>",
                });
            }
            rate = Some(parse_comma_decimal(raw)?);
        }

        rate.ok_or(ExtractionError::FormatNotFound)
    }
}
