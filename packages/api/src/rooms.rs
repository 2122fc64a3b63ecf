//! Room loaders and actions.

use dioxus::prelude::*;
use school::forms::RoomForm;
use school::{ActionResult, Page, PageQuery, Room};

/// One page of rooms matching the keyword and filters.
#[cfg(feature = "server")]
#[post("/api/rooms/list", session: tower_sessions::Session)]
pub async fn list_rooms(query: PageQuery) -> Result<Page<Room>, ServerFnError> {
    use crate::backend::{loader_error, BackendClient};

    let client = BackendClient::for_session(&session)
        .await
        .map_err(loader_error)?;
    client.list("/rooms", &query).await.map_err(loader_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/rooms/list")]
pub async fn list_rooms(query: PageQuery) -> Result<Page<Room>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a room.
#[cfg(feature = "server")]
#[post("/api/rooms/create", session: tower_sessions::Session)]
pub async fn create_room(form: RoomForm) -> Result<ActionResult<Room>, ServerFnError> {
    use crate::backend::{into_optional_action, BackendClient, BackendError};

    if let Some(rejected) = school::forms::reject_invalid(&form) {
        return Ok(rejected);
    }
    let result: Result<Option<Room>, BackendError> = async {
        let client = BackendClient::for_session(&session).await?;
        client.post::<_, Room>("/rooms", &form).await
    }
    .await;
    if result.is_ok() {
        tracing::info!("Created room {}", form.name);
    }
    Ok(into_optional_action(result))
}

#[cfg(not(feature = "server"))]
#[post("/api/rooms/create")]
pub async fn create_room(form: RoomForm) -> Result<ActionResult<Room>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update name, capacity and status of a room.
#[cfg(feature = "server")]
#[post("/api/rooms/update", session: tower_sessions::Session)]
pub async fn update_room(id: i64, form: RoomForm) -> Result<ActionResult<Room>, ServerFnError> {
    use crate::backend::{into_optional_action, BackendClient, BackendError};

    if let Some(rejected) = school::forms::reject_invalid(&form) {
        return Ok(rejected);
    }
    let result: Result<Option<Room>, BackendError> = async {
        let client = BackendClient::for_session(&session).await?;
        client.put::<_, Room>(&format!("/rooms/{id}"), &form).await
    }
    .await;
    Ok(into_optional_action(result))
}

#[cfg(not(feature = "server"))]
#[post("/api/rooms/update")]
pub async fn update_room(id: i64, form: RoomForm) -> Result<ActionResult<Room>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a room.
#[cfg(feature = "server")]
#[post("/api/rooms/delete", session: tower_sessions::Session)]
pub async fn delete_room(id: i64) -> Result<ActionResult<()>, ServerFnError> {
    use crate::backend::{into_action, BackendClient, BackendError};

    let result: Result<(), BackendError> = async {
        let client = BackendClient::for_session(&session).await?;
        client.delete(&format!("/rooms/{id}")).await
    }
    .await;
    if result.is_ok() {
        tracing::info!("Deleted room {}", id);
    }
    Ok(into_action(result))
}

#[cfg(not(feature = "server"))]
#[post("/api/rooms/delete")]
pub async fn delete_room(id: i64) -> Result<ActionResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
