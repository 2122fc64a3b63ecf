//! Class and level loaders, plus the auto-arrange job.
//!
//! Arranging students into classes can take a while on the backend, so it is
//! split into [`auto_arrange_classes`], which starts the job, and
//! [`auto_arrange_progress`], which the page polls until a terminal state.

use dioxus::prelude::*;
use school::{ActionResult, Class, JobProgress, Level, Page, PageQuery};

/// One page of classes. Filter with `levelId` or `status`.
#[cfg(feature = "server")]
#[post("/api/classes/list", session: tower_sessions::Session)]
pub async fn list_classes(query: PageQuery) -> Result<Page<Class>, ServerFnError> {
    use crate::backend::{loader_error, BackendClient};

    let client = BackendClient::for_session(&session)
        .await
        .map_err(loader_error)?;
    client.list("/classes", &query).await.map_err(loader_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/classes/list")]
pub async fn list_classes(query: PageQuery) -> Result<Page<Class>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// One page of skill levels.
#[cfg(feature = "server")]
#[post("/api/levels/list", session: tower_sessions::Session)]
pub async fn list_levels(query: PageQuery) -> Result<Page<Level>, ServerFnError> {
    use crate::backend::{loader_error, BackendClient};

    let client = BackendClient::for_session(&session)
        .await
        .map_err(loader_error)?;
    client.list("/levels", &query).await.map_err(loader_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/levels/list")]
pub async fn list_levels(query: PageQuery) -> Result<Page<Level>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Start arranging waiting students into classes starting on `start_week`
/// (ISO date of a Monday).
#[cfg(feature = "server")]
#[post("/api/classes/auto-arrange", session: tower_sessions::Session)]
pub async fn auto_arrange_classes(start_week: String) -> Result<ActionResult<()>, ServerFnError> {
    use crate::backend::{into_action, BackendClient, BackendError};

    let result: Result<(), BackendError> = async {
        let client = BackendClient::for_session(&session).await?;
        client
            .post::<_, serde_json::Value>(
                "/classes/auto-arrange",
                &serde_json::json!({ "startWeek": start_week }),
            )
            .await
            .map(|_| ())
    }
    .await;
    if result.is_ok() {
        tracing::info!("Auto-arrange started for week of {}", start_week);
    }
    Ok(into_action(result))
}

#[cfg(not(feature = "server"))]
#[post("/api/classes/auto-arrange")]
pub async fn auto_arrange_classes(start_week: String) -> Result<ActionResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Current progress of the auto-arrange job.
#[cfg(feature = "server")]
#[get("/api/classes/auto-arrange/progress", session: tower_sessions::Session)]
pub async fn auto_arrange_progress() -> Result<JobProgress, ServerFnError> {
    use crate::backend::{loader_error, BackendClient};

    let client = BackendClient::for_session(&session)
        .await
        .map_err(loader_error)?;
    client
        .get("/classes/auto-arrange/progress")
        .await
        .map_err(loader_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/classes/auto-arrange/progress")]
pub async fn auto_arrange_progress() -> Result<JobProgress, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
