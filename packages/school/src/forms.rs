//! Form payloads and their client-side validation.
//!
//! Validation runs before any network call; its errors are field-scoped and
//! rendered next to the inputs. The same structs are serialized as request
//! bodies for the backend.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::action::{ActionResult, ApiError};
use crate::models::{Role, Room, RoomStatus};

/// Create/edit payload for a room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomForm {
    #[validate(length(min = 1, max = 100, message = "Room name is required"))]
    pub name: String,
    #[validate(range(min = 1, max = 100, message = "Capacity must be between 1 and 100"))]
    pub capacity: u32,
    pub status: RoomStatus,
}

impl Default for RoomForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            capacity: 1,
            status: RoomStatus::Opened,
        }
    }
}

impl From<&Room> for RoomForm {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            capacity: room.capacity,
            status: room.status,
        }
    }
}

/// Create payload for an account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccountForm {
    #[validate(length(min = 1, max = 100, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    pub role: Role,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: Role::Student,
        }
    }
}

/// Create payload for an entrance test session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntranceTestForm {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    pub date: NaiveDate,
    #[validate(range(min = 1, max = 8, message = "Shift must be between 1 and 8"))]
    pub shift: u8,
    #[validate(range(min = 1, message = "Choose a room"))]
    pub room_id: i64,
    pub instructor_id: Option<String>,
    #[validate(range(min = 1, max = 100, message = "Capacity must be between 1 and 100"))]
    pub capacity: u32,
}

/// Credentials posted to the login endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Vietnamese mobile numbers: 10 digits starting with 0, or +84 and 9 digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.replace([' ', '.', '-'], "");
    let national = match digits.strip_prefix("+84") {
        Some(rest) => format!("0{rest}"),
        None => digits,
    };
    let valid = national.len() == 10
        && national.starts_with('0')
        && national.chars().all(|c| c.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("phone");
        error.message = Some("Phone number is invalid".into());
        Err(error)
    }
}

/// First message per field, keyed by field name, for rendering under inputs.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errors)| {
            let first = errors.first()?;
            let message = first
                .message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            Some((field.to_string(), message))
        })
        .collect()
}

/// Validate `form`, returning field messages on failure.
pub fn check<T: Validate>(form: &T) -> Result<(), BTreeMap<String, String>> {
    form.validate().map_err(|errors| field_messages(&errors))
}

/// Reject an invalid form as a failed action, before any backend call.
pub fn reject_invalid<F: Validate, T>(form: &F) -> Option<ActionResult<T>> {
    let errors = check(form).err()?;
    let message = errors.into_values().collect::<Vec<_>>().join(", ");
    Some(ActionResult::failure(ApiError::new(422, message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_form_valid() {
        let form = RoomForm {
            name: "Room A".into(),
            capacity: 10,
            status: RoomStatus::Opened,
        };
        assert!(check(&form).is_ok());
        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(body["status"], "Opened");
        assert_eq!(body["capacity"], 10);
    }

    #[test]
    fn test_room_form_field_errors() {
        let form = RoomForm {
            name: String::new(),
            capacity: 0,
            status: RoomStatus::Closed,
        };
        let errors = check(&form).unwrap_err();
        assert_eq!(errors.get("name").map(String::as_str), Some("Room name is required"));
        assert_eq!(
            errors.get("capacity").map(String::as_str),
            Some("Capacity must be between 1 and 100")
        );
    }

    #[test]
    fn test_reject_invalid_joins_messages() {
        let form = RoomForm {
            name: "Room A".into(),
            capacity: 500,
            status: RoomStatus::Opened,
        };
        let rejected: ActionResult<Room> = reject_invalid(&form).unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.status, Some(422));
        assert_eq!(rejected.error_message(), Some("Capacity must be between 1 and 100"));

        let ok = RoomForm {
            capacity: 10,
            ..form
        };
        assert!(reject_invalid::<_, Room>(&ok).is_none());
    }

    #[test]
    fn test_phone_formats() {
        assert!(validate_phone("0912345678").is_ok());
        assert!(validate_phone("0912 345 678").is_ok());
        assert!(validate_phone("+84912345678").is_ok());
        assert!(validate_phone("912345678").is_err());
        assert!(validate_phone("09123456789").is_err());
        assert!(validate_phone("09123abc78").is_err());
    }

    #[test]
    fn test_account_form_errors() {
        let form = AccountForm {
            full_name: "Nguyen Van An".into(),
            email: "not-an-email".into(),
            phone: "123".into(),
            role: Role::Teacher,
        };
        let errors = check(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["phone"], "Phone number is invalid");
        assert_eq!(errors["email"], "Email is invalid");
    }

    #[test]
    fn test_entrance_test_form_requires_room() {
        let form = EntranceTestForm {
            name: "Spring placement".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            shift: 2,
            room_id: 0,
            instructor_id: None,
            capacity: 20,
        };
        let errors = check(&form).unwrap_err();
        assert_eq!(errors["room_id"], "Choose a room");
    }
}
