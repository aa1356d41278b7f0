use crate::{SessionToken, User};

use serde::Deserialize;

/// Body of a successful `POST /user/login/`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: SessionToken,
    pub user: User,
}
