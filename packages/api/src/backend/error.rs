//! Backend error type and its mapping onto loader errors and action results.

use dioxus::prelude::ServerFnError;
use school::{ActionResult, ApiError};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("not signed in")]
    Unauthenticated,
    #[error("session store error: {0}")]
    Session(String),
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected backend response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend answered without a body")]
    EmptyBody,
    #[error("{0}")]
    Api(ApiError),
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Api(api) => api,
            BackendError::Unauthenticated => ApiError::new(401, "Please sign in again"),
            BackendError::Transport(e) if e.is_timeout() => {
                ApiError::new(504, "The server took too long to answer")
            }
            BackendError::Transport(_) => ApiError::new(503, "The server is unreachable"),
            BackendError::Session(_) | BackendError::Decode(_) | BackendError::EmptyBody => {
                ApiError::new(500, "The server could not complete the request")
            }
        }
    }
}

/// Map a loader failure onto the server-function error shown by the route.
pub fn loader_error(err: BackendError) -> ServerFnError {
    tracing::error!("Loader failed: {}", err);
    ServerFnError::new(ApiError::from(err).to_string())
}

/// Turn an action outcome into the `{ success, error }` payload for a toast.
pub fn into_action<T>(result: Result<T, BackendError>) -> ActionResult<T> {
    into_optional_action(result.map(Some))
}

/// Like [`into_action`] for endpoints that may answer without a body.
pub fn into_optional_action<T>(result: Result<Option<T>, BackendError>) -> ActionResult<T> {
    match result {
        Ok(data) => ActionResult::completed(data),
        Err(err) => {
            tracing::warn!("Action failed: {}", err);
            ActionResult::failure(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_passes_through() {
        let err = BackendError::Api(ApiError::new(409, "Room name already exists"));
        let result: ActionResult<()> = into_action(Err(err));
        assert!(!result.success);
        assert_eq!(result.error_message(), Some("Room name already exists"));
        assert_eq!(result.status, Some(409));
    }

    #[test]
    fn test_bodyless_success_is_success() {
        let result: ActionResult<school::Room> = into_optional_action(Ok(None));
        assert!(result.success);
        assert!(result.data.is_none());
        assert!(result.error_message().is_none());
    }

    #[test]
    fn test_unauthenticated_maps_to_401() {
        let api: ApiError = BackendError::Unauthenticated.into();
        assert!(api.is_unauthorized());
    }

    #[test]
    fn test_loader_error_message() {
        let err = loader_error(BackendError::Api(ApiError::new(404, "Not found")));
        assert!(err.to_string().contains("Not found"));
    }
}
