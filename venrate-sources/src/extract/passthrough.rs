//! Rate API extractor.
//!
//! The API already answers with a number, so this only unwraps `rate` or
//! surfaces the API's own `error` message.

use serde_json::Value;
use venrate_types::{CurrencyCode, ExtractionError};

use super::Extractor;

#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughExtractor;

impl Extractor for PassthroughExtractor {
    fn extract(&self, body: &str, _currency: &CurrencyCode) -> Result<f64, ExtractionError> {
        let json: Value =
            serde_json::from_str(body).map_err(|e| ExtractionError::InvalidJson(e.to_string()))?;

        if let Some(error) = json.get("error").filter(|e| !e.is_null()) {
            let message = error
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| error.to_string());
            return Err(ExtractionError::ApiError(message));
        }

        match json.get("rate") {
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| ExtractionError::UnparsableValue {
                raw: n.to_string(),
            }),
            Some(Value::String(s)) => {
                s.trim()
                    .parse::<f64>()
                    .map_err(|_| ExtractionError::UnparsableValue { raw: s.clone() })
            }
            _ => Err(ExtractionError::FieldMissing { field: "rate" }),
        }
    }
}
