use crate::ClientResult;

use async_trait::async_trait;
use tt_core::SessionToken;

/// Source of the bearer token for authenticated requests.
///
/// Read on every request, so a login or logout is picked up by clients that
/// were built before it happened.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> ClientResult<Option<SessionToken>>;
}
