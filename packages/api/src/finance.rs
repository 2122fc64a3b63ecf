//! Read-only transaction and tuition loaders.
//!
//! Students only see their own rows; the backend scopes the result by the
//! session token, so the same loaders serve both dashboards.

use dioxus::prelude::*;
use school::{Page, PageQuery, Transaction, Tuition};

#[cfg(feature = "server")]
#[post("/api/transactions/list", session: tower_sessions::Session)]
pub async fn list_transactions(query: PageQuery) -> Result<Page<Transaction>, ServerFnError> {
    use crate::backend::{loader_error, BackendClient};

    let client = BackendClient::for_session(&session)
        .await
        .map_err(loader_error)?;
    client
        .list("/transactions", &query)
        .await
        .map_err(loader_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/transactions/list")]
pub async fn list_transactions(query: PageQuery) -> Result<Page<Transaction>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/tuitions/list", session: tower_sessions::Session)]
pub async fn list_tuitions(query: PageQuery) -> Result<Page<Tuition>, ServerFnError> {
    use crate::backend::{loader_error, BackendClient};

    let client = BackendClient::for_session(&session)
        .await
        .map_err(loader_error)?;
    client.list("/tuitions", &query).await.map_err(loader_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/tuitions/list")]
pub async fn list_tuitions(query: PageQuery) -> Result<Page<Tuition>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
