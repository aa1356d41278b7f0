//! HTTP access to the TaxTrack API.
//!
//! [`ClientFactory`] hands out the two request clients the app needs: a
//! public one used only for login and an authenticated one that attaches the
//! stored bearer token to every request.

pub(crate) mod api_client;
pub(crate) mod authenticated_client;
pub(crate) mod client_factory;
pub(crate) mod error;
pub(crate) mod services;
pub(crate) mod token_provider;

#[cfg(test)]
mod tests;

pub use api_client::ApiClient;
pub use authenticated_client::AuthenticatedClient;
pub use client_factory::ClientFactory;
pub use error::{ClientError, Result as ClientResult};
pub use services::login::{LOGIN_PATH, LoginService, login};
pub use services::search::{SEARCH_PATH, search_clients};
pub use token_provider::TokenProvider;
