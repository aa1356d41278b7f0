//! Session persistence and the signed-in session handle.
//!
//! The token and user profile live in a [`KeyValueStore`]; [`Session`] wraps
//! that store and a [`LoginService`](tt_client::LoginService) and is passed
//! explicitly to whatever needs to know who is signed in.

pub(crate) mod error;
pub(crate) mod session;
pub(crate) mod session_state;
pub(crate) mod session_store;
pub(crate) mod signature_log;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use error::{SessionError, SessionResult, StoreError, StoreResult};
pub use session::Session;
pub use session_state::SessionState;
pub use session_store::{SessionStore, StoredSession, TOKEN_KEY, USER_KEY};
pub use signature_log::{SIGNED_DOCUMENTS_KEY, SignatureLog};
pub use store::KeyValueStore;
pub use store::file_store::FileStore;
pub use store::memory_store::MemoryStore;
