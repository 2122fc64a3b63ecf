//! Account loaders and actions.

use dioxus::prelude::*;
use school::forms::AccountForm;
use school::{Account, AccountStatus, ActionResult, Page, PageQuery};

/// One page of accounts. Filter by role with the `roles` filter
/// (comma-separated, e.g. `Teacher,Staff`).
#[cfg(feature = "server")]
#[post("/api/accounts/list", session: tower_sessions::Session)]
pub async fn list_accounts(query: PageQuery) -> Result<Page<Account>, ServerFnError> {
    use crate::backend::{loader_error, BackendClient};

    let client = BackendClient::for_session(&session)
        .await
        .map_err(loader_error)?;
    client.list("/accounts", &query).await.map_err(loader_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/accounts/list")]
pub async fn list_accounts(query: PageQuery) -> Result<Page<Account>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create an account. The backend emails the initial password.
#[cfg(feature = "server")]
#[post("/api/accounts/create", session: tower_sessions::Session)]
pub async fn create_account(form: AccountForm) -> Result<ActionResult<Account>, ServerFnError> {
    use crate::backend::{into_optional_action, BackendClient, BackendError};

    if let Some(rejected) = school::forms::reject_invalid(&form) {
        return Ok(rejected);
    }
    let result: Result<Option<Account>, BackendError> = async {
        let client = BackendClient::for_session(&session).await?;
        client.post("/accounts", &form).await
    }
    .await;
    if result.is_ok() {
        tracing::info!("Created {:?} account {}", form.role, form.email);
    }
    Ok(into_optional_action(result))
}

#[cfg(not(feature = "server"))]
#[post("/api/accounts/create")]
pub async fn create_account(form: AccountForm) -> Result<ActionResult<Account>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Activate or deactivate an account.
#[cfg(feature = "server")]
#[post("/api/accounts/status", session: tower_sessions::Session)]
pub async fn update_account_status(
    id: String,
    status: AccountStatus,
) -> Result<ActionResult<Account>, ServerFnError> {
    use crate::backend::{into_optional_action, BackendClient, BackendError};

    let result: Result<Option<Account>, BackendError> = async {
        let client = BackendClient::for_session(&session).await?;
        client
            .put(
                &format!("/accounts/{id}/status"),
                &serde_json::json!({ "status": status }),
            )
            .await
    }
    .await;
    Ok(into_optional_action(result))
}

#[cfg(not(feature = "server"))]
#[post("/api/accounts/status")]
pub async fn update_account_status(
    id: String,
    status: AccountStatus,
) -> Result<ActionResult<Account>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
