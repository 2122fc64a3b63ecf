use std::future::Future;

use dioxus::prelude::*;
use school::{Account, Level, Page, PageQuery, Role, Room};

use super::PickerSource;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoomSource;

impl PickerSource for RoomSource {
    type Item = Room;

    fn fetch(&self, query: PageQuery) -> impl Future<Output = Result<Page<Room>, ServerFnError>> + 'static {
        api::rooms::list_rooms(query)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LevelSource;

impl PickerSource for LevelSource {
    type Item = Level;

    fn fetch(&self, query: PageQuery) -> impl Future<Output = Result<Page<Level>, ServerFnError>> + 'static {
        api::classes::list_levels(query)
    }
}

/// Accounts holding one of `roles`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountSource {
    pub roles: Vec<Role>,
}

impl AccountSource {
    pub fn with_roles(roles: &[Role]) -> Self {
        Self {
            roles: roles.to_vec(),
        }
    }

    fn roles_filter(&self) -> String {
        self.roles
            .iter()
            .map(|role| format!("{role:?}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl PickerSource for AccountSource {
    type Item = Account;

    fn fetch(&self, query: PageQuery) -> impl Future<Output = Result<Page<Account>, ServerFnError>> + 'static {
        api::accounts::list_accounts(query.with_filter("roles", self.roles_filter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_filter_joins() {
        let source = AccountSource::with_roles(&[Role::Teacher, Role::Staff]);
        assert_eq!(source.roles_filter(), "Teacher,Staff");
        assert_eq!(AccountSource::default().roles_filter(), "");
    }
}
