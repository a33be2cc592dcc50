//! Single-slot memo of a source's last successful response.

use chrono::{DateTime, Utc};
use venrate_types::CurrencyCode;

/// Raw body of the last successful live fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    pub body: String,
    /// Pair the body was requested for.
    pub currency_from: CurrencyCode,
    pub currency_to: CurrencyCode,
    /// Diagnostics only. The slot never expires.
    pub fetched_at: DateTime<Utc>,
}

/// One response slot, owned by exactly one source.
///
/// Starts empty, is overwritten by every successful live fetch (last write
/// wins) and is never invalidated by time.
#[derive(Debug, Default)]
pub struct ResponseCache {
    slot: Option<CachedResponse>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot and returns the stored body.
    pub fn store(&mut self, body: String, from: &CurrencyCode, to: &CurrencyCode) -> &str {
        let entry = self.slot.insert(CachedResponse {
            body,
            currency_from: from.clone(),
            currency_to: to.clone(),
            fetched_at: Utc::now(),
        });
        &entry.body
    }

    pub fn get(&self) -> Option<&CachedResponse> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
