//! # Records mirrored from the backend
//!
//! Every type here is an opaque copy of a JSON object returned by the remote
//! API. The backend owns creation, mutation and deletion; the front-end only
//! renders these values and sends form payloads back. Field names travel as
//! camelCase on the wire.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Account`] | A user of the platform with a [`Role`] and an [`AccountStatus`]. |
//! | [`Room`] | A practice or lesson room with a seat capacity. |
//! | [`Level`] | A skill level that classes and entrance tests place students into. |
//! | [`Class`] | A group of students at one level taught by one teacher. |
//! | [`EntranceTest`] | A scheduled placement exam in a room. |
//! | [`Transaction`] / [`Tuition`] | Payments and the tuition periods they cover. |
//! | [`Notification`] | A message addressed to the signed-in account. |

use serde::{Deserialize, Serialize};

/// Role value returned by the auth endpoint. Decides which dashboard a user sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Staff,
    Teacher,
    Student,
}

impl Role {
    /// URL prefix of the dashboard owned by this role.
    pub fn route_prefix(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Staff => "/staff",
            Role::Teacher => "/teacher",
            Role::Student => "/account",
        }
    }

    /// Whether a signed-in user with this role may open `path`.
    ///
    /// Public pages are open to everyone; each dashboard prefix is reserved to
    /// its own role.
    pub fn can_access(self, path: &str) -> bool {
        match Role::owner_of(path) {
            Some(owner) => owner == self,
            None => true,
        }
    }

    /// The role owning a dashboard path, or `None` for public pages.
    pub fn owner_of(path: &str) -> Option<Role> {
        [Role::Admin, Role::Staff, Role::Teacher, Role::Student]
            .into_iter()
            .find(|role| {
                let prefix = role.route_prefix();
                path == prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/') || rest.starts_with('?'))
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Staff => "Staff",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
    Waiting,
}

/// An account as listed by `/accounts` and returned by `/authentication/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Account {
    /// Name to show in headers, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    #[default]
    Opened,
    Closed,
}

impl RoomStatus {
    pub fn label(self) -> &'static str {
        match self {
            RoomStatus::Opened => "Opened",
            RoomStatus::Closed => "Closed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub status: RoomStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassStatus {
    #[default]
    NotStarted,
    Ongoing,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub level_id: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub status: ClassStatus,
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub capacity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntranceTest {
    pub id: i64,
    pub name: String,
    /// ISO-8601 date-time, e.g. `2025-03-01T08:00:00`.
    pub date: String,
    pub shift: u8,
    pub room_id: i64,
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default)]
    pub instructor_id: Option<String>,
    #[serde(default)]
    pub instructor_name: Option<String>,
    pub capacity: u32,
    #[serde(default)]
    pub registered: u32,
}

impl EntranceTest {
    /// Whether every seat of the exam is taken.
    pub fn is_full(&self) -> bool {
        self.registered >= self.capacity
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[default]
    Pending,
    Succeed,
    Failed,
    Refunded,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    pub amount: i64,
    pub method: String,
    #[serde(default)]
    pub status: TransactionStatus,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tuition {
    pub id: String,
    pub student_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    pub class_id: i64,
    #[serde(default)]
    pub class_name: Option<String>,
    pub amount: i64,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub status: TransactionStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: String,
}

/// Split an ISO-8601 date-time (`2025-03-01T08:00:00`) into its date and time parts.
///
/// A value without a time part yields an empty time.
pub fn split_iso_datetime(value: &str) -> (&str, &str) {
    match value.split_once('T') {
        Some((date, time)) => (date, time.trim_end_matches('Z')),
        None => (value, ""),
    }
}

/// Format an amount of money in whole dong with thousands separators.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    if amount < 0 {
        out.insert(0, '-');
    }
    out.push_str(" đ");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_prefixes() {
        assert_eq!(Role::Admin.route_prefix(), "/admin");
        assert_eq!(Role::Student.route_prefix(), "/account");
    }

    #[test]
    fn test_role_access() {
        assert!(Role::Admin.can_access("/admin/rooms"));
        assert!(Role::Admin.can_access("/admin"));
        assert!(!Role::Admin.can_access("/staff/rooms"));
        assert!(Role::Teacher.can_access("/teacher/classes?page=2"));
        assert!(Role::Student.can_access("/survey"));
        assert!(Role::Student.can_access("/"));
        // a public page that merely shares a prefix
        assert!(Role::Student.can_access("/administration-info"));
        assert_eq!(Role::owner_of("/administration-info"), None);
    }

    #[test]
    fn test_room_deserializes_camel_case() {
        let room: Room =
            serde_json::from_str(r#"{"id":7,"name":"Room A","capacity":10,"status":"Opened"}"#)
                .unwrap();
        assert_eq!(room.name, "Room A");
        assert_eq!(room.status, RoomStatus::Opened);
    }

    #[test]
    fn test_account_optional_fields() {
        let account: Account = serde_json::from_str(
            r#"{"id":"a1","fullName":"","email":"an@piano.vn","role":"Staff"}"#,
        )
        .unwrap();
        assert_eq!(account.role, Role::Staff);
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.display_name(), "an@piano.vn");
    }

    #[test]
    fn test_split_iso_datetime() {
        assert_eq!(
            split_iso_datetime("2025-03-01T08:30:00"),
            ("2025-03-01", "08:30:00")
        );
        assert_eq!(split_iso_datetime("2025-03-01"), ("2025-03-01", ""));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0 đ");
        assert_eq!(format_amount(999), "999 đ");
        assert_eq!(format_amount(1_500_000), "1.500.000 đ");
        assert_eq!(format_amount(-25_000), "-25.000 đ");
    }

    #[test]
    fn test_entrance_test_full() {
        let test = EntranceTest {
            id: 1,
            name: "Spring placement".into(),
            date: "2025-03-01T08:00:00".into(),
            shift: 1,
            room_id: 2,
            room_name: None,
            instructor_id: None,
            instructor_name: None,
            capacity: 20,
            registered: 20,
        };
        assert!(test.is_full());
    }
}
