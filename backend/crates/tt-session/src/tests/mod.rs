
use crate::{KeyValueStore, MemoryStore, StoreError, StoreResult};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;
use tt_client::{ClientError, ClientResult, LoginService};
use tt_core::{LoginResponse, SessionToken, User};

/// Login endpoint stand-in that replays a canned outcome.
pub(crate) struct FakeLogin {
    outcome: Mutex<Option<ClientResult<LoginResponse>>>,
    calls: Mutex<usize>,
}

impl FakeLogin {
    pub(crate) fn succeeding(token: &str, first_name: &str, last_name: &str) -> Self {
        Self::with(Ok(LoginResponse {
            token: SessionToken::new(token),
            user: User::new(first_name, last_name),
        }))
    }

    pub(crate) fn failing(err: ClientError) -> Self {
        Self::with(Err(err))
    }

    fn with(outcome: ClientResult<LoginResponse>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            calls: Mutex::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl LoginService for FakeLogin {
    async fn login(&self, _username: &str, _password: &str) -> ClientResult<LoginResponse> {
        *self.calls.lock().unwrap() += 1;
        self.outcome
            .lock()
            .unwrap()
            .take()
            .expect("FakeLogin called more than once")
    }
}

/// Store whose every operation fails.
pub(crate) struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::unavailable("storage offline"))
    }

    async fn set(&self, _key: &str, _value: String) -> StoreResult<()> {
        Err(StoreError::unavailable("storage offline"))
    }

    async fn remove(&self, _key: &str) -> StoreResult<bool> {
        Err(StoreError::unavailable("storage offline"))
    }
}

/// Login stub that parks until released, so other calls can race it.
pub(crate) struct BlockingLogin {
    pub(crate) started: Notify,
    pub(crate) release: Notify,
    inner: FakeLogin,
}

impl BlockingLogin {
    pub(crate) fn succeeding(token: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            started: Notify::new(),
            release: Notify::new(),
            inner: FakeLogin::succeeding(token, first_name, last_name),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.inner.calls()
    }
}

#[async_trait]
impl LoginService for BlockingLogin {
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        self.started.notify_one();
        self.release.notified().await;
        self.inner.login(username, password).await
    }
}

/// Memory store whose first `get` reads its value, then parks until released.
#[derive(Default)]
pub(crate) struct GatedStore {
    pub(crate) inner: MemoryStore,
    pub(crate) entered: Notify,
    pub(crate) release: Notify,
    passed: AtomicBool,
}

#[async_trait]
impl KeyValueStore for GatedStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self.inner.get(key).await?;
        if !self.passed.swap(true, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<bool> {
        self.inner.remove(key).await
    }

    async fn set_many(&self, entries: Vec<(String, String)>) -> StoreResult<()> {
        self.inner.set_many(entries).await
    }
}

/// Memory store that yields to the scheduler after every read.
#[derive(Default)]
pub(crate) struct YieldingStore {
    inner: MemoryStore,
}

#[async_trait]
impl KeyValueStore for YieldingStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self.inner.get(key).await?;
        tokio::task::yield_now().await;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<bool> {
        self.inner.remove(key).await
    }
}
