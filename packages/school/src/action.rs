//! Error and result payloads that cross the server-function boundary.
//!
//! Loader failures travel as an [`ApiError`] rendered into the server-function
//! error and end up in a route error view. Action (mutation) outcomes travel as
//! an [`ActionResult`] so the page can show a toast and keep its form state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A backend failure reduced to what the UI shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Build from a non-success backend response.
    ///
    /// The backend reports errors as `{ "message": .. }`, `{ "error": .. }`
    /// or `{ "title": .. }` (validation problems); anything else falls back to
    /// the raw body, then to a status-derived message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let from_json = parsed.as_ref().and_then(|value| {
            ["message", "error", "title"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()))
                .map(str::to_string)
        });
        let message = match from_json {
            Some(message) if !message.trim().is_empty() => message,
            _ if parsed.is_none() && !body.trim().is_empty() => body.trim().to_string(),
            _ => default_message(status).to_string(),
        };
        Self { message, status }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

fn default_message(status: u16) -> &'static str {
    match status {
        400 => "The request was invalid",
        401 => "Please sign in again",
        403 => "You do not have permission to do this",
        404 => "Not found",
        409 => "The record was changed by someone else",
        500..=599 => "The server could not complete the request",
        _ => "Something went wrong",
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl std::error::Error for ApiError {}

/// Outcome of a mutating action, shaped `{ success, data?, error? }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self::completed(Some(data))
    }

    /// Successful outcome, with or without a returned record.
    pub fn completed(data: Option<T>) -> Self {
        Self {
            success: true,
            data,
            error: None,
            status: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.message),
            status: Some(error.status),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<T> From<Result<T, ApiError>> for ActionResult<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => ActionResult::ok(data),
            Err(error) => ActionResult::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field() {
        let err = ApiError::from_response(400, r#"{"message":"Capacity exceeded"}"#);
        assert_eq!(err, ApiError::new(400, "Capacity exceeded"));
    }

    #[test]
    fn test_error_field() {
        let err = ApiError::from_response(409, r#"{"error":"Room name already exists"}"#);
        assert_eq!(err.message, "Room name already exists");
    }

    #[test]
    fn test_plain_text_body() {
        let err = ApiError::from_response(502, "Bad gateway\n");
        assert_eq!(err.message, "Bad gateway");
    }

    #[test]
    fn test_empty_body_uses_status() {
        assert_eq!(ApiError::from_response(401, "").message, "Please sign in again");
        assert!(ApiError::from_response(403, "").is_unauthorized());
        assert_eq!(
            ApiError::from_response(500, "{}").message,
            "The server could not complete the request"
        );
    }

    #[test]
    fn test_action_result_wire_shape() {
        let result: ActionResult<()> = ActionResult::failure(ApiError::new(400, "Capacity exceeded"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Capacity exceeded");

        let parsed: ActionResult<u32> = serde_json::from_str(r#"{"success":true,"data":3}"#).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data, Some(3));
    }

    #[test]
    fn test_from_result() {
        let ok: ActionResult<&str> = Ok("done").into();
        assert!(ok.success);
        let failed: ActionResult<&str> = Err(ApiError::new(404, "Not found")).into();
        assert_eq!(failed.error_message(), Some("Not found"));
        assert_eq!(failed.status, Some(404));
    }
}
