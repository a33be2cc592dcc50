//! P2P marketplace extractor.
//!
//! The asset and fiat filters travel in the request payload, so the response
//! only ever lists ads for the requested pair. The rate is the price of the
//! first ad.

use serde::Deserialize;
use serde_json::Value;
use venrate_types::{CurrencyCode, ExtractionError};

use super::Extractor;

const PRICE_FIELD: &str = "data[0].adv.price";

#[derive(Debug, Deserialize)]
struct AdvSearchResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPriceExtractor;

impl Extractor for JsonPriceExtractor {
    fn extract(&self, body: &str, _currency: &CurrencyCode) -> Result<f64, ExtractionError> {
        let response: AdvSearchResponse = serde_json::from_str(body)
            .map_err(|e| ExtractionError::InvalidJson(e.to_string()))?;

        let first = match response.data.as_deref() {
            Some([first, ..]) if response.success => first,
            _ => {
                return Err(ExtractionError::RequestRejected {
                    body: body.to_string(),
                });
            }
        };

        let price = first
            .get("adv")
            .and_then(|adv| adv.get("price"))
            .filter(|price| !price.is_null())
            .ok_or(ExtractionError::FieldMissing { field: PRICE_FIELD })?;

        match price {
            Value::String(s) => {
                s.trim()
                    .parse::<f64>()
                    .map_err(|_| ExtractionError::UnparsableValue { raw: s.clone() })
            }
            Value::Number(n) => n.as_f64().ok_or_else(|| ExtractionError::UnparsableValue {
                raw: n.to_string(),
            }),
            other => Err(ExtractionError::UnparsableValue {
                raw: other.to_string(),
            }),
        }
    }
}
