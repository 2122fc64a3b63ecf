//! Notification loader and the mark-as-read action.

use dioxus::prelude::*;
use school::{ActionResult, Notification, Page, PageQuery};

#[cfg(feature = "server")]
#[post("/api/notifications/list", session: tower_sessions::Session)]
pub async fn list_notifications(query: PageQuery) -> Result<Page<Notification>, ServerFnError> {
    use crate::backend::{loader_error, BackendClient};

    let client = BackendClient::for_session(&session)
        .await
        .map_err(loader_error)?;
    client
        .list("/notifications", &query)
        .await
        .map_err(loader_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/notifications/list")]
pub async fn list_notifications(query: PageQuery) -> Result<Page<Notification>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mark notifications as read. An empty `ids` marks all of them.
#[cfg(feature = "server")]
#[post("/api/notifications/read", session: tower_sessions::Session)]
pub async fn mark_notifications_read(ids: Vec<i64>) -> Result<ActionResult<()>, ServerFnError> {
    use crate::backend::{into_action, BackendClient, BackendError};

    let result: Result<(), BackendError> = async {
        let client = BackendClient::for_session(&session).await?;
        client
            .put::<_, serde_json::Value>(
                "/notifications/read",
                &serde_json::json!({ "ids": ids }),
            )
            .await
            .map(|_| ())
    }
    .await;
    Ok(into_action(result))
}

#[cfg(not(feature = "server"))]
#[post("/api/notifications/read")]
pub async fn mark_notifications_read(ids: Vec<i64>) -> Result<ActionResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
