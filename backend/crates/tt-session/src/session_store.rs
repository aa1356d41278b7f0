use crate::{KeyValueStore, SessionError, SessionResult};

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use tt_client::{ClientError, ClientResult, TokenProvider};
use tt_core::{SessionToken, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Token and user as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: SessionToken,
    pub user: User,
}

/// Typed view of the session keys in a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Persist token and user together.
    pub async fn save(&self, token: &SessionToken, user: &User) -> SessionResult<()> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| SessionError::corrupt_session(e.to_string()))?;

        self.store
            .set_many(vec![
                (TOKEN_KEY.to_string(), token.as_str().to_string()),
                (USER_KEY.to_string(), user_json),
            ])
            .await?;
        Ok(())
    }

    pub async fn token(&self) -> SessionResult<Option<SessionToken>> {
        Ok(self
            .store
            .get(TOKEN_KEY)
            .await?
            .map(SessionToken::new)
            .filter(|token| !token.is_blank()))
    }

    /// Stored user profile, if any.
    pub async fn user(&self) -> SessionResult<Option<User>> {
        match self.store.get(USER_KEY).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| SessionError::corrupt_session(e.to_string())),
            None => Ok(None),
        }
    }

    /// Both halves of a stored session.
    ///
    /// A user without a token is not a session: it is reported as absent.
    pub async fn load(&self) -> SessionResult<Option<StoredSession>> {
        let user = self.user().await?;
        let token = self.token().await?;

        match (token, user) {
            (Some(token), Some(user)) => Ok(Some(StoredSession { token, user })),
            (None, Some(_)) => {
                warn!("Stored user has no token; ignoring stale session");
                Ok(None)
            }
            (Some(_), None) => {
                warn!("Stored token has no user; ignoring stale session");
                Ok(None)
            }
            (None, None) => Ok(None),
        }
    }

    /// Delete both session keys. Returns how many were present.
    pub async fn clear(&self) -> SessionResult<usize> {
        Ok(self.store.remove_many(&[TOKEN_KEY, USER_KEY]).await?)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenProvider for SessionStore {
    async fn token(&self) -> ClientResult<Option<SessionToken>> {
        SessionStore::token(self)
            .await
            .map_err(|e| ClientError::token_source(e.to_string()))
    }
}
