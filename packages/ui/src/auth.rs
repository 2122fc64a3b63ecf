//! Authentication context and role gating for the UI.

use std::time::Duration;

use api::{Account, Role};
use dioxus::prelude::*;

use crate::timer::sleep;

/// How often the session is re-checked against the backend.
const SESSION_CHECK_INTERVAL: Duration = Duration::from_secs(300);

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<Account>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Where a visitor of `path` must be sent instead, if anywhere.
    ///
    /// Dashboards need a signed-in user of the owning role; a signed-in user
    /// opening the login page goes to their own dashboard.
    pub fn redirect_for(&self, path: &str) -> Option<String> {
        if self.loading {
            return None;
        }
        match (self.role(), Role::owner_of(path)) {
            (Some(role), _) if path == "/login" => Some(role.route_prefix().to_string()),
            (Some(role), Some(_)) if !role.can_access(path) => Some("/login".to_string()),
            (None, Some(_)) => Some("/login".to_string()),
            _ => None,
        }
    }
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        let user = match api::get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Could not load current user: {}", e);
                None
            }
        };
        auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    // A token that expires while the page stays open signs the user out
    use_effect(move || {
        spawn(async move {
            loop {
                sleep(SESSION_CHECK_INTERVAL).await;

                let current = auth_state.peek().clone();
                if current.loading || current.user.is_none() {
                    continue;
                }
                if let Ok(user) = api::get_current_user().await {
                    if current.user != user {
                        auth_state.set(AuthState {
                            user,
                            loading: false,
                        });
                    }
                }
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Renders its children only for a signed-in user allowed on the current
/// route; everyone else is sent away.
#[component]
pub fn RoleGate(path: String, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let target = use_memo(use_reactive(&path, move |path| {
        auth.read().redirect_for(&path)
    }));

    use_effect(move || {
        if let Some(target) = target() {
            tracing::info!("Redirecting to {}", target);
            nav.replace(target);
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "p-8 text-sm text-neutral-500", "Loading..." }
        };
    }
    if target().is_some() {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let nav = use_navigator();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
                nav.replace("/login");
            }
            Err(e) => tracing::error!("Logout failed: {}", e),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use school::AccountStatus;

    fn signed_in(role: Role) -> AuthState {
        AuthState {
            user: Some(Account {
                id: "u1".into(),
                full_name: "Le Thi Hoa".into(),
                email: "hoa@example.com".into(),
                phone: None,
                role,
                status: AccountStatus::Active,
                avatar_url: None,
            }),
            loading: false,
        }
    }

    #[test]
    fn test_no_redirect_while_loading() {
        assert_eq!(AuthState::default().redirect_for("/admin/rooms"), None);
    }

    #[test]
    fn test_anonymous_sent_to_login_from_dashboards_only() {
        let anonymous = AuthState {
            user: None,
            loading: false,
        };
        assert_eq!(anonymous.redirect_for("/staff/classes").as_deref(), Some("/login"));
        assert_eq!(anonymous.redirect_for("/survey"), None);
        assert_eq!(anonymous.redirect_for("/login"), None);
    }

    #[test]
    fn test_wrong_role_sent_to_login() {
        let teacher = signed_in(Role::Teacher);
        assert_eq!(teacher.redirect_for("/admin/rooms").as_deref(), Some("/login"));
        assert_eq!(teacher.redirect_for("/teacher/classes"), None);
    }

    #[test]
    fn test_signed_in_user_leaves_login_page() {
        let student = signed_in(Role::Student);
        assert_eq!(student.redirect_for("/login").as_deref(), Some("/account"));
    }
}
