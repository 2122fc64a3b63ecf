use std::collections::BTreeMap;

use dioxus::prelude::*;
use school::forms::check;
use school::LoginForm;

use crate::auth::{use_auth, AuthState};
use crate::components::{Button, FieldError, Input, Label};
use crate::toast::{show_toast, use_toasts, ToastLevel};

/// Email and password sign-in. A successful login lands on the dashboard of
/// the account's role.
#[component]
pub fn LoginView() -> Element {
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(BTreeMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let payload = form();
        if let Err(field_errors) = check(&payload) {
            errors.set(field_errors);
            return;
        }
        errors.set(BTreeMap::new());
        loading.set(true);
        spawn(async move {
            match api::login(payload).await {
                Ok(result) if result.success => {
                    if let Some(account) = result.data {
                        let target = account.role.route_prefix();
                        auth.set(AuthState {
                            user: Some(account),
                            loading: false,
                        });
                        nav.replace(target);
                    }
                }
                Ok(result) => {
                    let message = result.error_message().unwrap_or("Login failed").to_string();
                    show_toast(&mut toasts, ToastLevel::Warning, &message);
                }
                Err(e) => show_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
            }
            loading.set(false);
        });
    };

    let current = form();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",
            h1 { class: "mb-2 text-2xl font-bold text-neutral-800", "Piano School" }
            p { class: "mb-8 text-sm text-neutral-500", "Sign in to your dashboard" }

            form {
                class: "w-full max-w-sm",
                onsubmit: handle_submit,
                div {
                    class: "mb-4",
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
                        class: "w-full mt-1.5",
                        r#type: "email",
                        value: current.email.clone(),
                        invalid: errors.read().contains_key("email"),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    FieldError { message: errors.read().get("email").cloned() }
                }
                div {
                    class: "mb-4",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        class: "w-full mt-1.5",
                        r#type: "password",
                        value: current.password.clone(),
                        invalid: errors.read().contains_key("password"),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    FieldError { message: errors.read().get("password").cloned() }
                }
                Button {
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
