//! Public entrance survey, one step at a time.

use chrono::NaiveDate;
use dioxus::prelude::*;
use school::{SurveyStep, SurveyWizard};

use crate::components::{Button, ButtonVariant, FieldError, Input, Label};
use crate::toast::{show_toast, use_toasts, ToastLevel};

const WEEKDAYS: [(u8, &str); 7] = [
    (1, "Mon"),
    (2, "Tue"),
    (3, "Wed"),
    (4, "Thu"),
    (5, "Fri"),
    (6, "Sat"),
    (7, "Sun"),
];

#[component]
pub fn EntranceSurveyView(on_submitted: EventHandler<()>) -> Element {
    let mut toasts = use_toasts();
    let mut wizard = use_signal(SurveyWizard::default);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        if submitting() {
            return;
        }
        let Some(survey) = wizard.write().submission() else {
            return;
        };
        submitting.set(true);
        spawn(async move {
            match api::surveys::submit_entrance_survey(survey).await {
                Ok(result) if result.success => {
                    show_toast(&mut toasts, ToastLevel::Success, "Thanks! We will contact you about your entrance test.");
                    wizard.set(SurveyWizard::default());
                    on_submitted.call(());
                }
                Ok(result) => {
                    let message = result.error_message().unwrap_or("Could not send the survey").to_string();
                    show_toast(&mut toasts, ToastLevel::Warning, &message);
                }
                Err(e) => show_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
            }
            submitting.set(false);
        });
    };

    let state = wizard();
    let step = state.step();
    let survey = state.survey.clone();
    let error = move |field: &str| wizard.read().error(field).map(str::to_string);

    rsx! {
        div {
            class: "max-w-xl mx-auto p-6",
            h1 { class: "mb-2 text-xl font-semibold", "Entrance survey" }
            ol {
                class: "flex gap-4 mb-6 text-sm",
                for s in SurveyStep::ALL {
                    li {
                        key: "{s.index()}",
                        class: if s == step { "font-semibold text-primary-600" } else { "text-neutral-500" },
                        "{s.index() + 1}. {s.title()}"
                    }
                }
            }

            {match step {
                SurveyStep::PersonalInfo => rsx! {
                    div {
                        class: "mb-4",
                        Label { html_for: "survey-name", "Full name" }
                        Input {
                            id: "survey-name",
                            class: "w-full mt-1.5",
                            value: survey.full_name.clone(),
                            oninput: move |evt: FormEvent| wizard.write().survey.full_name = evt.value(),
                        }
                        FieldError { message: error("full_name") }
                    }
                    div {
                        class: "mb-4",
                        Label { html_for: "survey-email", "Email" }
                        Input {
                            id: "survey-email",
                            class: "w-full mt-1.5",
                            r#type: "email",
                            value: survey.email.clone(),
                            oninput: move |evt: FormEvent| wizard.write().survey.email = evt.value(),
                        }
                        FieldError { message: error("email") }
                    }
                    div {
                        class: "mb-4",
                        Label { html_for: "survey-phone", "Phone" }
                        Input {
                            id: "survey-phone",
                            class: "w-full mt-1.5",
                            r#type: "tel",
                            value: survey.phone.clone(),
                            oninput: move |evt: FormEvent| wizard.write().survey.phone = evt.value(),
                        }
                        FieldError { message: error("phone") }
                    }
                    div {
                        class: "mb-4",
                        Label { html_for: "survey-birth", "Date of birth" }
                        Input {
                            id: "survey-birth",
                            class: "w-full mt-1.5",
                            r#type: "date",
                            value: survey.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                            oninput: move |evt: FormEvent| {
                                wizard.write().survey.date_of_birth = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok();
                            },
                        }
                        FieldError { message: error("date_of_birth") }
                    }
                },
                SurveyStep::Background => rsx! {
                    div {
                        class: "mb-4 flex items-center gap-2",
                        input {
                            id: "survey-piano",
                            r#type: "checkbox",
                            checked: survey.owns_piano,
                            onchange: move |evt: FormEvent| wizard.write().survey.owns_piano = evt.checked(),
                        }
                        Label { html_for: "survey-piano", "I have a piano at home" }
                    }
                    div {
                        class: "mb-4",
                        Label { html_for: "survey-years", "Years of experience" }
                        Input {
                            id: "survey-years",
                            class: "w-full mt-1.5",
                            r#type: "number",
                            value: survey.years_of_experience.to_string(),
                            oninput: move |evt: FormEvent| {
                                wizard.write().survey.years_of_experience = evt.value().trim().parse().unwrap_or(0);
                            },
                        }
                        FieldError { message: error("years_of_experience") }
                    }
                    div {
                        class: "mb-4",
                        Label { html_for: "survey-goal", "What do you want to learn?" }
                        textarea {
                            id: "survey-goal",
                            class: "input w-full mt-1.5",
                            rows: "4",
                            value: "{survey.learning_goal}",
                            oninput: move |evt: FormEvent| wizard.write().survey.learning_goal = evt.value(),
                        }
                        FieldError { message: error("learning_goal") }
                    }
                },
                SurveyStep::Schedule => rsx! {
                    div {
                        class: "mb-4",
                        Label { html_for: "survey-days", "Preferred days" }
                        div {
                            id: "survey-days",
                            class: "flex gap-2 mt-1.5",
                            for (day, name) in WEEKDAYS {
                                label {
                                    key: "{day}",
                                    class: "flex items-center gap-1 text-sm",
                                    input {
                                        r#type: "checkbox",
                                        checked: survey.preferred_days.contains(&day),
                                        onchange: move |_| wizard.write().survey.toggle_day(day),
                                    }
                                    "{name}"
                                }
                            }
                        }
                        FieldError { message: error("preferred_days") }
                    }
                    div {
                        class: "mb-4",
                        Label { html_for: "survey-shift", "Preferred shift" }
                        Input {
                            id: "survey-shift",
                            class: "w-full mt-1.5",
                            r#type: "number",
                            value: survey.preferred_shift.to_string(),
                            oninput: move |evt: FormEvent| {
                                wizard.write().survey.preferred_shift = evt.value().trim().parse().unwrap_or(0);
                            },
                        }
                        FieldError { message: error("preferred_shift") }
                    }
                },
                SurveyStep::Review => rsx! {
                    dl {
                        class: "grid grid-cols-2 gap-2 text-sm",
                        dt { "Name" } dd { "{survey.full_name}" }
                        dt { "Email" } dd { "{survey.email}" }
                        dt { "Phone" } dd { "{survey.phone}" }
                        dt { "Owns a piano" } dd { if survey.owns_piano { "Yes" } else { "No" } }
                        dt { "Experience" } dd { "{survey.years_of_experience} years" }
                        dt { "Goal" } dd { "{survey.learning_goal}" }
                        dt { "Shift" } dd { "{survey.preferred_shift}" }
                    }
                },
            }}

            div {
                class: "flex justify-between mt-6",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: step == SurveyStep::PersonalInfo,
                    onclick: move |_| {
                        wizard.write().back();
                    },
                    "Back"
                }
                if step == SurveyStep::Review {
                    Button {
                        disabled: submitting(),
                        onclick: handle_submit,
                        if submitting() { "Sending..." } else { "Submit" }
                    }
                } else {
                    Button {
                        onclick: move |_| {
                            wizard.write().next();
                        },
                        "Next"
                    }
                }
            }
        }
    }
}
