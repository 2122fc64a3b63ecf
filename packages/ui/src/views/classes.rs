//! Classes screen: level and teacher filters, auto-arrange with live progress.

use chrono::{Datelike, Duration as Days, Utc};
use dioxus::prelude::*;
use school::{normalize_page, Class, ClassStatus, PageQuery, PickerOption, QueryKey, Role};

use crate::components::{Button, Pill, PillTone};
use crate::config::use_school_config;
use crate::data_table::{Column, RemoteDataTable};
use crate::dialogs::use_confirmation_dialog;
use crate::picker::{AccountSource, Combobox, LevelSource, MultiSelect};
use crate::progress::{use_job_progress, ProgressBar};
use crate::query::use_query_client;
use crate::toast::{show_toast, use_toasts, ToastLevel};

/// Filters of the classes table, kept in the URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassFilters {
    pub level_id: String,
    pub teacher_ids: Vec<String>,
}

/// ISO date of the Monday of next week.
fn next_monday() -> String {
    let today = Utc::now().date_naive();
    let days_to_monday = 7 - today.weekday().num_days_from_monday() as i64;
    (today + Days::days(days_to_monday)).format("%Y-%m-%d").to_string()
}

#[component]
pub fn ClassesView(
    page: u32,
    filters: ClassFilters,
    #[props(default)] can_arrange: bool,
    on_params: EventHandler<(u32, ClassFilters)>,
) -> Element {
    let queries = use_query_client();
    let config = use_school_config();
    let mut toasts = use_toasts();
    let page = normalize_page(page);

    let classes = use_resource(use_reactive((&page, &filters), move |(page, filters)| {
        let key = QueryKey::new(["classes"])
            .with(format!("level={}", filters.level_id))
            .with(format!("teachers={}", filters.teacher_ids.join(",")))
            .with(format!("page={page}"));
        let _version = queries.version(&key);
        let query = PageQuery::new("", page, config.read().table.page_size)
            .with_filter("levelId", filters.level_id.clone())
            .with_filter("teacherIds", filters.teacher_ids.join(","));
        async move { api::classes::list_classes(query).await }
    }));

    let job = use_job_progress(api::classes::auto_arrange_progress);
    let mut was_active = use_signal(|| false);
    use_effect(move || {
        let active = (job.active)();
        if *was_active.peek() && !active {
            queries.invalidate("classes");
        }
        was_active.set(active);
    });

    let arrange = use_confirmation_dialog(
        "Arrange classes",
        "Waiting students will be placed into new classes starting next week.",
        move |_| {
            spawn(async move {
                match api::classes::auto_arrange_classes(next_monday()).await {
                    Ok(result) if result.success => {
                        show_toast(&mut toasts, ToastLevel::Info, "Arranging classes...");
                        job.start();
                    }
                    Ok(result) => {
                        let message = result.error_message().unwrap_or("Could not start arranging").to_string();
                        show_toast(&mut toasts, ToastLevel::Warning, &message);
                    }
                    Err(e) => show_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
                }
            });
        },
    );

    let columns = vec![
        Column::new("Class", |class: &Class| rsx! { span { class: "font-medium", "{class.name}" } }),
        Column::new("Teacher", |class: &Class| {
            let teacher = class.teacher_name.as_deref().unwrap_or("Unassigned");
            rsx! { "{teacher}" }
        }),
        Column::new("Students", |class: &Class| rsx! { "{class.total_students}/{class.capacity}" }),
        Column::new("Status", |class: &Class| {
            let (tone, label) = match class.status {
                ClassStatus::NotStarted => (PillTone::Warning, "Not started"),
                ClassStatus::Ongoing => (PillTone::Success, "Ongoing"),
                ClassStatus::Finished => (PillTone::Neutral, "Finished"),
            };
            rsx! { Pill { tone, "{label}" } }
        }),
    ];

    let level_filters = filters.clone();
    let teacher_filters = filters.clone();
    let page_filters = filters.clone();
    let arranging = (job.active)();
    // Labels resolve once the picker has loaded the matching items
    let chosen_level = (!filters.level_id.is_empty())
        .then(|| PickerOption::new(filters.level_id.clone(), filters.level_id.clone()));
    let chosen_teachers: Vec<PickerOption> = filters
        .teacher_ids
        .iter()
        .map(|id| PickerOption::new(id.clone(), id.clone()))
        .collect();
    let header = rsx! {
        div {
            class: "flex items-center justify-between gap-2",
            div {
                class: "flex gap-2",
                div {
                    class: "w-56",
                    Combobox {
                        source: LevelSource,
                        placeholder: "All levels",
                        chosen: chosen_level,
                        clearable: true,
                        on_change: move |option: Option<PickerOption>| {
                            let filters = ClassFilters {
                                level_id: option.map(|o| o.value).unwrap_or_default(),
                                ..level_filters.clone()
                            };
                            on_params.call((1, filters));
                        },
                    }
                }
                div {
                    class: "w-72",
                    MultiSelect {
                        source: AccountSource::with_roles(&[Role::Teacher]),
                        placeholder: "All teachers",
                        chosen: chosen_teachers,
                        on_change: move |teacher_ids: Vec<String>| {
                            let filters = ClassFilters {
                                teacher_ids,
                                ..teacher_filters.clone()
                            };
                            on_params.call((1, filters));
                        },
                    }
                }
            }
            if can_arrange {
                Button {
                    disabled: arranging,
                    onclick: move |_| arrange.open(),
                    if arranging { "Arranging..." } else { "Auto-arrange" }
                }
            }
        }
    };

    rsx! {
        div {
            class: "p-6",
            h1 { class: "mb-4 text-xl font-semibold", "Classes" }
            if arranging || !job.tracker.read().is_polling() {
                ProgressBar { tracker: job.tracker }
            }
            RemoteDataTable {
                columns,
                source: classes,
                loading_text: "Loading classes...",
                empty_text: "No classes yet.",
                header,
                on_page_change: move |page: u32| on_params.call((page, page_filters.clone())),
            }
        }
        {arrange.dialog()}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    #[test]
    fn test_next_monday_is_a_future_monday() {
        let date = NaiveDate::parse_from_str(&next_monday(), "%Y-%m-%d").unwrap();
        let today = Utc::now().date_naive();
        assert_eq!(date.weekday(), Weekday::Mon);
        assert!(date > today);
        assert!(date - today <= Days::days(7));
    }
}
