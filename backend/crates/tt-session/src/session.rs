use crate::{SessionError, SessionResult, SessionState, SessionStore};

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, error, info, warn};
use tokio::sync::RwLock;
use tt_client::LoginService;
use tt_core::{LoginResponse, User};

/// Handle on the signed-in session.
///
/// Cheap to clone; every clone shares the same state. Construct one at
/// start-up, call [`restore`](Self::restore), then hand it to whatever
/// needs to know who is signed in.
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
    /// Bumped by every login attempt and logout, only while `state` is
    /// write-locked. A login commits only if it still holds the latest value.
    epoch: Arc<AtomicU64>,
    store: SessionStore,
    auth: Arc<dyn LoginService>,
}

impl Session {
    /// New handle in the `Loading` state.
    pub fn new(auth: Arc<dyn LoginService>, store: SessionStore) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::Loading)),
            epoch: Arc::new(AtomicU64::new(0)),
            store,
            auth,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// In-memory user; does not touch storage.
    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user().cloned()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// User as currently persisted, read straight from storage.
    pub async fn current_user(&self) -> SessionResult<Option<User>> {
        self.store.user().await
    }

    /// Pick up a session persisted by an earlier run.
    ///
    /// Only acts while `Loading`; afterwards it just reports the current
    /// state. Unreadable or half-written sessions leave the handle signed out.
    pub async fn restore(&self) -> SessionState {
        if !self.state.read().await.is_loading() {
            return self.state().await;
        }

        let restored = match self.store.load().await {
            Ok(Some(stored)) => {
                info!("Restored session for {}", stored.user.display_name());
                SessionState::Authenticated(stored.user)
            }
            Ok(None) => {
                debug!("No stored session");
                SessionState::Unauthenticated
            }
            Err(e) => {
                error!("Error loading session: {e}");
                SessionState::Unauthenticated
            }
        };

        let mut state = self.state.write().await;
        // A login that finished while storage was being read wins.
        if state.is_loading() {
            *state = restored;
        }
        state.clone()
    }

    /// Sign in and persist the session.
    ///
    /// On failure nothing is written and the previous state is put back.
    /// A logout that lands while the request is out wins: the response is
    /// discarded and `LoginCancelled` is returned.
    pub async fn login(&self, username: &str, password: &str) -> SessionResult<User> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(SessionError::empty_credentials());
        }

        let (previous, attempt) = {
            let mut state = self.state.write().await;
            if matches!(*state, SessionState::Authenticating) {
                return Err(SessionError::login_in_progress());
            }
            let attempt = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
            (
                std::mem::replace(&mut *state, SessionState::Authenticating),
                attempt,
            )
        };

        let response = self.request_login(username, password).await;

        let mut state = self.state.write().await;
        if self.epoch.load(Ordering::SeqCst) != attempt {
            warn!("Login superseded by logout; discarding response");
            return Err(SessionError::login_cancelled());
        }

        let saved = match response {
            Ok(response) => match self.store.save(&response.token, &response.user).await {
                Ok(()) => Ok(response.user),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };

        match saved {
            Ok(user) => {
                info!("Logged in as {}", user.display_name());
                *state = SessionState::Authenticated(user.clone());
                Ok(user)
            }
            Err(e) => {
                warn!("Login failed: {e}");
                *state = previous;
                Err(e)
            }
        }
    }

    async fn request_login(&self, username: &str, password: &str) -> SessionResult<LoginResponse> {
        let response = self
            .auth
            .login(username, password)
            .await
            .map_err(SessionError::from_client)?;

        if response.token.is_blank() {
            return Err(SessionError::malformed_response(
                "login response carried an empty token",
            ));
        }

        Ok(response)
    }

    /// Sign out. Best-effort: storage errors are logged and the in-memory
    /// state is cleared regardless. Any login still waiting on the server
    /// is cancelled.
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *state = SessionState::Unauthenticated;

        match self.store.clear().await {
            Ok(0) => debug!("Logout: no stored session to clear"),
            Ok(_) => info!("Logged out"),
            Err(e) => error!("Error during logout: {e}"),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
