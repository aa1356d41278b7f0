use crate::{ApiClient, ClientError, ClientResult, TokenProvider};

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Client that sends `Authorization: Bearer <token>` on every request.
///
/// The token is awaited from the provider per request rather than captured
/// when the client is built.
#[derive(Clone)]
pub struct AuthenticatedClient {
    inner: ApiClient,
    tokens: Arc<dyn TokenProvider>,
}

impl AuthenticatedClient {
    pub fn new(inner: ApiClient, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { inner, tokens }
    }

    pub fn api(&self) -> &ApiClient {
        &self.inner
    }

    pub(crate) async fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> ClientResult<RequestBuilder> {
        let token = self
            .tokens
            .token()
            .await?
            .filter(|token| !token.is_blank())
            .ok_or_else(ClientError::missing_token)?;

        Ok(self
            .inner
            .request(method, segments)?
            .bearer_auth(token.as_str()))
    }

    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> ClientResult<T> {
        self.inner.execute(req).await
    }
}

impl fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("base_url", &self.inner.base_url().as_str())
            .finish_non_exhaustive()
    }
}
