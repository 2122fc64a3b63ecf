use dioxus::prelude::*;
use school::Role;
use ui::views::DashboardShell;
use ui::RoleGate;

use crate::Route;

/// Gate on the role, then render the sidebar around the nested route.
#[component]
fn DashboardLayout(role: Role) -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        RoleGate {
            path: path.clone(),
            DashboardShell {
                role,
                current_path: path,
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn AdminLayout() -> Element {
    rsx! { DashboardLayout { role: Role::Admin } }
}

#[component]
pub fn StaffLayout() -> Element {
    rsx! { DashboardLayout { role: Role::Staff } }
}

#[component]
pub fn TeacherLayout() -> Element {
    rsx! { DashboardLayout { role: Role::Teacher } }
}

#[component]
pub fn StudentLayout() -> Element {
    rsx! { DashboardLayout { role: Role::Student } }
}
