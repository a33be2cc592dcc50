//! Rate source port.

use crate::domain::{RateQuery, RateResult, SourceConfig, SourceId};
use crate::error::RateError;
use crate::ports::Transport;

/// One rate source: transport defaults plus extraction, behind a single call.
///
/// `fetch_rate` takes `&mut self` because a live fetch overwrites the source's
/// cache slot. Exclusive access is therefore the caller's to arrange; the
/// source itself holds no locks.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Immutable transport defaults of this source.
    fn config(&self) -> &SourceConfig;

    fn id(&self) -> SourceId {
        self.config().source_id
    }

    /// Validates the query, fetches (or replays) the body and extracts the rate.
    async fn fetch_rate(
        &mut self,
        query: &RateQuery,
        transport: &dyn Transport,
    ) -> Result<RateResult, RateError>;
}
