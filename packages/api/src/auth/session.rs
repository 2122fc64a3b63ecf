//! Session data types.

use school::Role;
use serde::{Deserialize, Serialize};

/// Key for storing the backend bearer token in session.
pub const SESSION_TOKEN_KEY: &str = "access_token";

/// Key for storing the signed-in role in session.
pub const SESSION_ROLE_KEY: &str = "role";

/// Session data stored in the session store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionData {
    pub access_token: Option<String>,
    pub role: Option<Role>,
}

impl SessionData {
    pub async fn load(
        session: &tower_sessions::Session,
    ) -> Result<Self, tower_sessions::session::Error> {
        Ok(Self {
            access_token: session.get(SESSION_TOKEN_KEY).await?,
            role: session.get(SESSION_ROLE_KEY).await?,
        })
    }
}

/// Body returned by `POST /authentication/login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub role: Role,
}
