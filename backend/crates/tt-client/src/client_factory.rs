use crate::{ApiClient, AuthenticatedClient, ClientResult, TokenProvider};

use std::sync::Arc;

use tt_config::ApiConfig;

/// Builds the public and authenticated clients from one configuration.
///
/// Both share the same connection pool.
#[derive(Debug, Clone)]
pub struct ClientFactory {
    base: ApiClient,
}

impl ClientFactory {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Ok(Self {
            base: ApiClient::new(base_url)?,
        })
    }

    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        Ok(Self {
            base: ApiClient::from_config(config)?,
        })
    }

    /// Client for unauthenticated calls (login).
    pub fn public(&self) -> ApiClient {
        self.base.clone()
    }

    pub fn authenticated(&self, tokens: Arc<dyn TokenProvider>) -> AuthenticatedClient {
        AuthenticatedClient::new(self.base.clone(), tokens)
    }
}
