//! # API crate — loaders and actions for the piano school front-end
//!
//! Every public `async fn` in this crate is a Dioxus server function. The
//! browser calls it like a local function; on the server it forwards the call
//! to the remote school backend with the bearer token kept in the user's
//! session. Each one is compiled twice: once with the full server body (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Session keys and the backend login response |
//! | [`backend`] | `server` | Configuration singleton, `reqwest` client, error mapping |
//! | [`rooms`], [`accounts`], [`classes`], [`entrance_tests`], [`surveys`], [`finance`], [`notifications`] | — | Loaders and actions per backend resource |
//!
//! ## Conventions
//!
//! - **Loaders** (`list_*`, `get_*`) return `Result<T, ServerFnError>`; a
//!   backend failure becomes a server-function error rendered by the route.
//! - **Actions** (create/update/delete/submit) return
//!   `Result<ActionResult<T>, ServerFnError>`; backend failures are folded into
//!   `ActionResult { success: false, error }` so the page can toast them and
//!   keep its form state.
//!
//! ## Server functions exposed here
//!
//! - **Authentication**: `get_current_user`, `login`, `logout`
//! - **Configuration**: `get_client_config`

use dioxus::prelude::*;

pub mod accounts;
pub mod auth;
#[cfg(feature = "server")]
pub mod backend;
pub mod classes;
pub mod entrance_tests;
pub mod finance;
pub mod notifications;
pub mod rooms;
pub mod surveys;

pub use school::{Account, ActionResult, LoginForm, Page, PageQuery, Role, SchoolConfig};

/// Get the account signed in on this session, if any.
///
/// A rejected token clears the session instead of failing the route.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<Account>, ServerFnError> {
    use crate::backend::{loader_error, BackendClient, BackendError};

    let data = auth::SessionData::load(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    if data.access_token.is_none() {
        return Ok(None);
    }

    let client = BackendClient::for_session(&session)
        .await
        .map_err(loader_error)?;
    match client.get::<Account>("/authentication/me").await {
        Ok(account) => Ok(Some(account)),
        Err(BackendError::Api(err)) if err.is_unauthorized() => {
            tracing::info!("Stored token rejected, clearing session");
            session
                .flush()
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?;
            Ok(None)
        }
        Err(err) => Err(loader_error(err)),
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<Account>, ServerFnError> {
    Ok(None)
}

/// Log in with email and password and keep the backend token in the session.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(form: LoginForm) -> Result<ActionResult<Account>, ServerFnError> {
    use crate::backend::{into_action, BackendClient, BackendError};

    if let Some(rejected) = school::forms::reject_invalid(&form) {
        return Ok(rejected);
    }

    let body = serde_json::json!({
        "email": form.email.trim().to_lowercase(),
        "password": form.password,
    });

    let result: Result<Account, BackendError> = async {
        let anonymous = BackendClient::anonymous().await;
        let response: auth::LoginResponse = anonymous
            .post("/authentication/login", &body)
            .await?
            .ok_or(BackendError::EmptyBody)?;

        session
            .insert(auth::SESSION_TOKEN_KEY, &response.access_token)
            .await
            .map_err(|e| BackendError::Session(e.to_string()))?;
        session
            .insert(auth::SESSION_ROLE_KEY, response.role)
            .await
            .map_err(|e| BackendError::Session(e.to_string()))?;

        let client = BackendClient::for_session(&session).await?;
        client.get::<Account>("/authentication/me").await
    }
    .await;

    if let Ok(account) = &result {
        tracing::info!("{} signed in as {:?}", account.email, account.role);
    }
    Ok(into_action(result))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(form: LoginForm) -> Result<ActionResult<Account>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Configuration the browser needs: picker, table and polling settings.
/// The backend address stays on the server.
#[cfg(feature = "server")]
#[get("/api/config")]
pub async fn get_client_config() -> Result<SchoolConfig, ServerFnError> {
    let mut config = backend::get_config().await.clone();
    config.api = Default::default();
    Ok(config)
}

#[cfg(not(feature = "server"))]
#[get("/api/config")]
pub async fn get_client_config() -> Result<SchoolConfig, ServerFnError> {
    Ok(SchoolConfig::default())
}
