//! Session keys and backend login types.

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::{LoginResponse, SessionData, SESSION_ROLE_KEY, SESSION_TOKEN_KEY};
