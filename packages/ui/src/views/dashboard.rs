//! Sidebar shell shared by the four role dashboards.

use dioxus::prelude::*;
use school::Role;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::{FaBell, FaChalkboardUser, FaClipboardList, FaDoorOpen, FaFileInvoiceDollar, FaMoneyBill, FaUsers};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Rooms,
    Accounts,
    Classes,
    EntranceTests,
    Transactions,
    Tuitions,
    Notifications,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Rooms => "Rooms",
            Section::Accounts => "Accounts",
            Section::Classes => "Classes",
            Section::EntranceTests => "Entrance tests",
            Section::Transactions => "Transactions",
            Section::Tuitions => "Tuition",
            Section::Notifications => "Notifications",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Section::Rooms => "rooms",
            Section::Accounts => "accounts",
            Section::Classes => "classes",
            Section::EntranceTests => "entrance-tests",
            Section::Transactions => "transactions",
            Section::Tuitions => "tuitions",
            Section::Notifications => "notifications",
        }
    }

    /// Dashboard sections available to `role`, in menu order.
    pub fn for_role(role: Role) -> &'static [Section] {
        match role {
            Role::Admin => &[
                Section::Rooms,
                Section::Accounts,
                Section::Classes,
                Section::EntranceTests,
                Section::Transactions,
                Section::Tuitions,
                Section::Notifications,
            ],
            Role::Staff => &[
                Section::Rooms,
                Section::Classes,
                Section::EntranceTests,
                Section::Notifications,
            ],
            Role::Teacher => &[Section::Classes, Section::Notifications],
            Role::Student => &[Section::Transactions, Section::Tuitions, Section::Notifications],
        }
    }

    pub fn href(self, role: Role) -> String {
        format!("{}/{}", role.route_prefix(), self.slug())
    }
}

#[component]
fn SectionIcon(section: Section) -> Element {
    match section {
        Section::Rooms => rsx! { Icon { icon: FaDoorOpen, width: 14, height: 14 } },
        Section::Accounts => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
        Section::Classes => rsx! { Icon { icon: FaChalkboardUser, width: 14, height: 14 } },
        Section::EntranceTests => rsx! { Icon { icon: FaClipboardList, width: 14, height: 14 } },
        Section::Transactions => rsx! { Icon { icon: FaMoneyBill, width: 14, height: 14 } },
        Section::Tuitions => rsx! { Icon { icon: FaFileInvoiceDollar, width: 14, height: 14 } },
        Section::Notifications => rsx! { Icon { icon: FaBell, width: 14, height: 14 } },
    }
}

/// Sidebar with the role's sections next to the routed page.
#[component]
pub fn DashboardShell(role: Role, current_path: String, children: Element) -> Element {
    let auth = use_auth();
    let name = auth()
        .user
        .as_ref()
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "flex min-h-screen",
            aside {
                class: "w-60 shrink-0 border-r border-neutral-200 bg-neutral-50 flex flex-col",
                div {
                    class: "px-4 py-4 border-b border-neutral-200",
                    p { class: "m-0 text-sm font-semibold", "Piano School" }
                    p { class: "m-0 text-xs text-neutral-500", "{role.label()}" }
                }
                nav {
                    class: "flex-1 py-2",
                    for section in Section::for_role(role).iter().copied() {
                        Link {
                            key: "{section.slug()}",
                            class: if current_path.starts_with(&section.href(role)) { "nav-item active" } else { "nav-item" },
                            to: section.href(role),
                            SectionIcon { section }
                            span { "{section.label()}" }
                        }
                    }
                }
                div {
                    class: "px-4 py-3 border-t border-neutral-200 flex items-center justify-between",
                    span { class: "text-sm truncate", "{name}" }
                    LogoutButton { class: "btn btn-ghost" }
                }
            }
            main {
                class: "flex-1 overflow-y-auto",
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_href_is_accessible_to_its_role() {
        for role in [Role::Admin, Role::Staff, Role::Teacher, Role::Student] {
            for section in Section::for_role(role) {
                let href = section.href(role);
                assert!(role.can_access(&href), "{href}");
                assert_eq!(Role::owner_of(&href), Some(role));
            }
        }
    }

    #[test]
    fn test_students_do_not_manage_rooms() {
        assert!(!Section::for_role(Role::Student).contains(&Section::Rooms));
        assert_eq!(Section::Transactions.href(Role::Student), "/account/transactions");
    }
}
