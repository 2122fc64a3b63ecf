//! Accounts screen: role filter, create dialog, activate/deactivate.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use school::forms::{check, AccountForm};
use school::{normalize_page, Account, AccountStatus, PageQuery, QueryKey, Role, SubmitOutcome};

use super::{ModalOverlay, SearchBox};
use crate::components::{Button, ButtonVariant, FieldError, Input, Label, Pill, PillTone, Select};
use crate::config::use_school_config;
use crate::data_table::{Column, RemoteDataTable};
use crate::dialogs::{submit, use_confirmation_dialog, use_fetcher, use_loading_dialog};
use crate::query::use_query_client;
use crate::toast::{announce, show_toast, use_toasts, ToastLevel};

const ROLES: [Role; 4] = [Role::Admin, Role::Staff, Role::Teacher, Role::Student];

fn parse_role(value: &str) -> Option<Role> {
    ROLES.into_iter().find(|role| format!("{role:?}") == value)
}

#[component]
pub fn AccountsView(
    page: u32,
    keyword: String,
    role: String,
    on_params: EventHandler<(u32, String, String)>,
) -> Element {
    let queries = use_query_client();
    let config = use_school_config();
    let mut toasts = use_toasts();
    let mut creating = use_signal(|| false);
    let mut pending_status = use_signal(|| Option::<(Account, AccountStatus)>::None);
    let page = normalize_page(page);

    let accounts = use_resource(use_reactive(
        (&page, &keyword, &role),
        move |(page, keyword, role)| {
            let key = QueryKey::new(["accounts"])
                .with(format!("role={role}"))
                .with(format!("page={page}"))
                .with(format!("keyword={keyword}"));
            let _version = queries.version(&key);
            let query = PageQuery::new(keyword, page, config.read().table.page_size).with_filter("roles", role);
            async move { api::accounts::list_accounts(query).await }
        },
    ));

    let fetcher = use_fetcher::<Account>();
    let status_loading = use_loading_dialog(fetcher, move |result| {
        let message = match result.data {
            Some(account) => format!("{} is now {:?}", account.display_name(), account.status),
            None => "Account status updated".to_string(),
        };
        show_toast(&mut toasts, ToastLevel::Success, &message);
        queries.invalidate("accounts");
    });

    let confirm_status = use_confirmation_dialog(
        "Change account status",
        "The account owner is affected immediately.",
        move |_| {
            let Some((account, status)) = pending_status.take() else {
                return;
            };
            spawn(async move {
                submit(fetcher, api::accounts::update_account_status(account.id, status)).await;
            });
        },
    );

    let columns = vec![
        Column::new("Name", |account: &Account| rsx! { span { class: "font-medium", "{account.display_name()}" } }),
        Column::new("Email", |account: &Account| rsx! { "{account.email}" }),
        Column::new("Phone", |account: &Account| rsx! { "{account.phone.clone().unwrap_or_default()}" }),
        Column::new("Role", |account: &Account| rsx! { "{account.role.label()}" }),
        Column::new("Status", |account: &Account| {
            let tone = match account.status {
                AccountStatus::Active => PillTone::Success,
                AccountStatus::Waiting => PillTone::Warning,
                AccountStatus::Inactive => PillTone::Danger,
            };
            rsx! { Pill { tone, "{account.status:?}" } }
        }),
        Column::new("", move |account: &Account| {
            let target = if account.status == AccountStatus::Active {
                AccountStatus::Inactive
            } else {
                AccountStatus::Active
            };
            let label = if target == AccountStatus::Active { "Activate" } else { "Deactivate" };
            let account = account.clone();
            rsx! {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        pending_status.set(Some((account.clone(), target)));
                        confirm_status.open();
                    },
                    "{label}"
                }
            }
        }),
    ];

    let mut role_options = vec![(String::new(), "All roles".to_string())];
    role_options.extend(ROLES.iter().map(|role| (format!("{role:?}"), role.label().to_string())));

    let default_role = parse_role(&role).unwrap_or(Role::Student);
    let search_keyword = keyword.clone();
    let search_role = role.clone();
    let filter_keyword = keyword.clone();
    let header = rsx! {
        div {
            class: "flex items-center justify-between gap-2",
            div {
                class: "flex gap-2",
                SearchBox {
                    keyword: search_keyword,
                    placeholder: "Search by name or email...",
                    on_search: move |keyword: String| on_params.call((1, keyword, search_role.clone())),
                }
                Select {
                    value: role.clone(),
                    options: role_options,
                    onchange: move |role: String| on_params.call((1, filter_keyword.clone(), role)),
                }
            }
            Button { onclick: move |_| creating.set(true), "New account" }
        }
    };

    rsx! {
        div {
            class: "p-6",
            h1 { class: "mb-4 text-xl font-semibold", "Accounts" }
            RemoteDataTable {
                columns,
                source: accounts,
                loading_text: "Loading accounts...",
                empty_text: "No accounts match.",
                header,
                on_page_change: move |page: u32| on_params.call((page, keyword.clone(), role.clone())),
            }
        }

        if creating() {
            ModalOverlay {
                on_close: move |_| creating.set(false),
                AccountFormDialog {
                    default_role,
                    on_saved: move |_| {
                        creating.set(false);
                        queries.invalidate("accounts");
                    },
                    on_cancel: move |_| creating.set(false),
                }
            }
        }

        {confirm_status.dialog()}
        {status_loading.dialog()}
    }
}

#[component]
fn AccountFormDialog(default_role: Role, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let mut toasts = use_toasts();
    let mut form = use_signal(|| AccountForm {
        role: default_role,
        ..Default::default()
    });
    let mut errors = use_signal(BTreeMap::<String, String>::new);
    let fetcher = use_fetcher::<Account>();

    let handle_submit = move |_| {
        let payload = form();
        if let Err(field_errors) = check(&payload) {
            errors.set(field_errors);
            return;
        }
        errors.set(BTreeMap::new());
        let saved = format!("Created account for {}", payload.email);
        spawn(async move {
            let result = submit(fetcher, api::accounts::create_account(payload)).await;
            if announce(&mut toasts, &SubmitOutcome::of(&result, saved, "Could not create account")) {
                on_saved.call(());
            }
        });
    };

    let current = form();
    let submitting = fetcher.read().is_submitting();
    let role_options = ROLES
        .iter()
        .map(|role| (format!("{role:?}"), role.label().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "p-6",
            h2 { class: "m-0 mb-5 text-lg font-semibold text-neutral-800", "New account" }

            div {
                class: "mb-4",
                Label { html_for: "account-name", "Full name" }
                Input {
                    id: "account-name",
                    class: "w-full mt-1.5",
                    value: current.full_name.clone(),
                    invalid: errors.read().contains_key("full_name"),
                    oninput: move |evt: FormEvent| form.write().full_name = evt.value(),
                }
                FieldError { message: errors.read().get("full_name").cloned() }
            }
            div {
                class: "mb-4",
                Label { html_for: "account-email", "Email" }
                Input {
                    id: "account-email",
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
                Label { html_for: "account-phone", "Phone" }
                Input {
                    id: "account-phone",
                    class: "w-full mt-1.5",
                    r#type: "tel",
                    value: current.phone.clone(),
                    invalid: errors.read().contains_key("phone"),
                    oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                }
                FieldError { message: errors.read().get("phone").cloned() }
            }
            div {
                class: "mb-4",
                Label { html_for: "account-role", "Role" }
                Select {
                    id: "account-role",
                    class: "w-full mt-1.5",
                    value: format!("{:?}", current.role),
                    options: role_options,
                    onchange: move |value: String| {
                        if let Some(role) = parse_role(&value) {
                            form.write().role = role;
                        }
                    },
                }
            }

            div {
                class: "flex gap-2 mt-5",
                Button {
                    disabled: submitting,
                    onclick: handle_submit,
                    if submitting { "Creating..." } else { "Create" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_round_trips_debug_names() {
        for role in ROLES {
            assert_eq!(parse_role(&format!("{role:?}")), Some(role));
        }
        assert_eq!(parse_role(""), None);
        assert_eq!(parse_role("admin"), None);
    }
}
