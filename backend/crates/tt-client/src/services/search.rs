use crate::{AuthenticatedClient, ClientResult};

use reqwest::Method;
use serde_json::Value;

/// `GET /client/search/{query}`
pub const SEARCH_PATH: [&str; 2] = ["client", "search"];

/// Search clients and properties on the server.
///
/// The query travels as a single percent-encoded path segment and the
/// response body is returned untouched.
pub async fn search_clients(client: &AuthenticatedClient, query: &str) -> ClientResult<Value> {
    let [client_segment, search_segment] = SEARCH_PATH;
    let req = client
        .request(Method::GET, &[client_segment, search_segment, query])
        .await?;
    client.execute(req).await
}
