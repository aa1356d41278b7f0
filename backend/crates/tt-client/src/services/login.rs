use crate::{ApiClient, ClientResult};

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::Serialize;
use tt_core::LoginResponse;

/// `POST /user/login/`, trailing slash included.
pub const LOGIN_PATH: [&str; 3] = ["user", "login", ""];

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Exchange credentials for a session token and user profile.
///
/// One request, no retry. Transport and server errors are returned as-is.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> ClientResult<LoginResponse> {
    debug!("Logging in as {username}");

    let body = LoginRequest { username, password };
    let req = client.request(Method::POST, &LOGIN_PATH)?.json(&body);
    client.execute(req).await
}

/// Seam between the session and the login endpoint.
#[async_trait]
pub trait LoginService: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse>;
}

#[async_trait]
impl LoginService for ApiClient {
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        login(self, username, password).await
    }
}
