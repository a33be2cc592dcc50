//! Central-bank page extractor.
//!
//! The BCV homepage lists each currency as
//! `<span> CODE </span> ... <strong> 40,60419933 </strong>`. The extractor
//! relies purely on document order: the first occurrence of the code, then
//! the next `<strong>`, then the next `</strong>`. If the code shows up
//! earlier in unrelated markup the wrong value is read; that matches the
//! page's observed behavior and is not guarded against.

use venrate_types::{CurrencyCode, ExtractionError};

use super::{Extractor, find_from, parse_comma_decimal};

const OPEN_TAG: &str = "<strong>";
const CLOSE_TAG: &str = "</strong>";

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTagExtractor;

impl Extractor for HtmlTagExtractor {
    fn extract(&self, body: &str, currency: &CurrencyCode) -> Result<f64, ExtractionError> {
        let code = currency.as_str();

        let label_idx = body
            .find(code)
            .ok_or_else(|| ExtractionError::CurrencyMarkerNotFound {
                currency: code.to_string(),
            })?;

        let open_idx = find_from(body, OPEN_TAG, label_idx).ok_or_else(|| {
            ExtractionError::OpeningMarkerNotFound {
                currency: code.to_string(),
                marker: OPEN_TAG,
            }
        })?;

        let close_idx = find_from(body, CLOSE_TAG, open_idx).ok_or_else(|| {
            ExtractionError::ClosingMarkerNotFound {
                currency: code.to_string(),
                marker: CLOSE_TAG,
            }
        })?;

        let raw = body[open_idx + OPEN_TAG.len()..close_idx].trim();
        if raw.is_empty() {
            return Err(ExtractionError::EmptyValue {
                context: "between <strong></strong>",
            });
        }

        parse_comma_decimal(raw)
    }
}
