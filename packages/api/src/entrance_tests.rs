//! Entrance test loaders and actions.

use dioxus::prelude::*;
use school::forms::EntranceTestForm;
use school::{ActionResult, EntranceTest, Page, PageQuery};

/// One page of entrance test sessions.
#[cfg(feature = "server")]
#[post("/api/entrance-tests/list", session: tower_sessions::Session)]
pub async fn list_entrance_tests(query: PageQuery) -> Result<Page<EntranceTest>, ServerFnError> {
    use crate::backend::{loader_error, BackendClient};

    let client = BackendClient::for_session(&session)
        .await
        .map_err(loader_error)?;
    client
        .list("/entrance-tests", &query)
        .await
        .map_err(loader_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/entrance-tests/list")]
pub async fn list_entrance_tests(query: PageQuery) -> Result<Page<EntranceTest>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Schedule a new entrance test session.
#[cfg(feature = "server")]
#[post("/api/entrance-tests/create", session: tower_sessions::Session)]
pub async fn create_entrance_test(
    form: EntranceTestForm,
) -> Result<ActionResult<EntranceTest>, ServerFnError> {
    use crate::backend::{into_optional_action, BackendClient, BackendError};

    if let Some(rejected) = school::forms::reject_invalid(&form) {
        return Ok(rejected);
    }
    let result: Result<Option<EntranceTest>, BackendError> = async {
        let client = BackendClient::for_session(&session).await?;
        client.post("/entrance-tests", &form).await
    }
    .await;
    Ok(into_optional_action(result))
}

#[cfg(not(feature = "server"))]
#[post("/api/entrance-tests/create")]
pub async fn create_entrance_test(
    form: EntranceTestForm,
) -> Result<ActionResult<EntranceTest>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
