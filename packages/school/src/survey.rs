//! # Entrance survey wizard
//!
//! The public enrollment flow collects one [`EntranceSurvey`] over four steps:
//!
//! | Step | Fields |
//! |------|--------|
//! | [`SurveyStep::PersonalInfo`] | full name, email, phone, date of birth |
//! | [`SurveyStep::Background`] | owns a piano, years of experience, learning goal |
//! | [`SurveyStep::Schedule`] | preferred weekdays, preferred shift |
//! | [`SurveyStep::Review`] | read-only summary, submit |
//!
//! [`SurveyWizard::next`] validates only the fields of the current step and
//! refuses to advance while any of them is invalid. [`SurveyWizard::back`]
//! never validates. The whole survey is posted once from the review step.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::forms::{field_messages, validate_phone};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurveyStep {
    #[default]
    PersonalInfo,
    Background,
    Schedule,
    Review,
}

impl SurveyStep {
    pub const ALL: [SurveyStep; 4] = [
        SurveyStep::PersonalInfo,
        SurveyStep::Background,
        SurveyStep::Schedule,
        SurveyStep::Review,
    ];

    pub fn index(self) -> usize {
        SurveyStep::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn title(self) -> &'static str {
        match self {
            SurveyStep::PersonalInfo => "About you",
            SurveyStep::Background => "Musical background",
            SurveyStep::Schedule => "Schedule",
            SurveyStep::Review => "Review",
        }
    }

    fn next(self) -> Option<SurveyStep> {
        SurveyStep::ALL.get(self.index() + 1).copied()
    }

    fn previous(self) -> Option<SurveyStep> {
        self.index().checked_sub(1).map(|i| SurveyStep::ALL[i])
    }

    /// Fields validated when leaving this step.
    fn fields(self) -> &'static [&'static str] {
        match self {
            SurveyStep::PersonalInfo => &["full_name", "email", "phone", "date_of_birth"],
            SurveyStep::Background => &["years_of_experience", "learning_goal"],
            SurveyStep::Schedule => &["preferred_days", "preferred_shift"],
            SurveyStep::Review => &[],
        }
    }
}

/// Answers posted to `/surveys/entrance`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntranceSurvey {
    #[validate(length(min = 1, max = 100, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(custom(function = "validate_birth_date"))]
    pub date_of_birth: Option<NaiveDate>,
    pub owns_piano: bool,
    #[validate(range(max = 80, message = "Years of experience looks wrong"))]
    pub years_of_experience: u32,
    #[validate(length(min = 1, max = 500, message = "Tell us what you want to learn"))]
    pub learning_goal: String,
    #[validate(length(min = 1, message = "Pick at least one day"))]
    pub preferred_days: Vec<u8>,
    #[validate(range(min = 1, max = 8, message = "Pick a shift"))]
    pub preferred_shift: u8,
}

impl Default for EntranceSurvey {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: None,
            owns_piano: false,
            years_of_experience: 0,
            learning_goal: String::new(),
            preferred_days: Vec::new(),
            preferred_shift: 0,
        }
    }
}

/// Students must be at least 4 years old; the date itself is required.
fn validate_birth_date(date: &NaiveDate) -> Result<(), ValidationError> {
    let today = chrono::Utc::now().date_naive();
    if *date > today || age_on(*date, today) < 4 {
        let mut error = ValidationError::new("date_of_birth");
        error.message = Some("Students must be at least 4 years old".into());
        return Err(error);
    }
    Ok(())
}

/// Completed years between `birth` and `today`.
fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age - 1
    } else {
        age
    }
}

impl EntranceSurvey {
    /// Toggle a weekday (1 = Monday .. 7 = Sunday), keeping the list sorted.
    pub fn toggle_day(&mut self, day: u8) {
        if let Some(pos) = self.preferred_days.iter().position(|d| *d == day) {
            self.preferred_days.remove(pos);
        } else if (1..=7).contains(&day) {
            self.preferred_days.push(day);
            self.preferred_days.sort_unstable();
        }
    }

    /// Field messages restricted to `step`.
    fn step_errors(&self, step: SurveyStep) -> BTreeMap<String, String> {
        let mut messages = match self.validate() {
            Ok(()) => BTreeMap::new(),
            Err(errors) => field_messages(&errors),
        };
        if step == SurveyStep::PersonalInfo && self.date_of_birth.is_none() {
            messages.insert("date_of_birth".into(), "Date of birth is required".into());
        }
        messages.retain(|field, _| step.fields().contains(&field.as_str()));
        messages
    }
}

/// Step position plus the answers gathered so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurveyWizard {
    pub survey: EntranceSurvey,
    step: SurveyStep,
    errors: BTreeMap<String, String>,
}

impl SurveyWizard {
    pub fn step(&self) -> SurveyStep {
        self.step
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Advance when the current step is valid. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        self.errors = self.survey.step_errors(self.step);
        if !self.errors.is_empty() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step without validating.
    pub fn back(&mut self) -> bool {
        self.errors.clear();
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// The survey ready to post, once every step validates.
    pub fn submission(&mut self) -> Option<EntranceSurvey> {
        for step in SurveyStep::ALL {
            let errors = self.survey.step_errors(step);
            if !errors.is_empty() {
                self.step = step;
                self.errors = errors;
                return None;
            }
        }
        Some(self.survey.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EntranceSurvey {
        EntranceSurvey {
            full_name: "Tran Thi Mai".into(),
            email: "mai@example.com".into(),
            phone: "0987654321".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2012, 6, 1),
            owns_piano: true,
            years_of_experience: 2,
            learning_goal: "Play Chopin nocturnes".into(),
            preferred_days: vec![2, 4],
            preferred_shift: 3,
        }
    }

    #[test]
    fn test_next_blocked_by_current_step_only() {
        let mut wizard = SurveyWizard::default();
        assert!(!wizard.next());
        assert_eq!(wizard.step(), SurveyStep::PersonalInfo);
        assert!(wizard.error("full_name").is_some());
        assert!(wizard.error("date_of_birth").is_some());
        // later steps do not report yet
        assert!(wizard.error("learning_goal").is_none());

        let full = filled();
        wizard.survey.full_name = full.full_name;
        wizard.survey.email = full.email;
        wizard.survey.phone = full.phone;
        wizard.survey.date_of_birth = full.date_of_birth;
        assert!(wizard.next());
        assert_eq!(wizard.step(), SurveyStep::Background);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_back_never_validates() {
        let mut wizard = SurveyWizard {
            survey: filled(),
            ..Default::default()
        };
        assert!(wizard.next());
        wizard.survey.learning_goal.clear();
        assert!(wizard.back());
        assert_eq!(wizard.step(), SurveyStep::PersonalInfo);
        assert!(!wizard.back());
    }

    #[test]
    fn test_walk_to_review_and_submit() {
        let mut wizard = SurveyWizard {
            survey: filled(),
            ..Default::default()
        };
        while wizard.next() {}
        assert_eq!(wizard.step(), SurveyStep::Review);
        assert_eq!(wizard.submission(), Some(filled()));
    }

    #[test]
    fn test_submission_jumps_to_first_invalid_step() {
        let mut wizard = SurveyWizard {
            survey: filled(),
            ..Default::default()
        };
        while wizard.next() {}
        wizard.survey.preferred_days.clear();
        assert!(wizard.submission().is_none());
        assert_eq!(wizard.step(), SurveyStep::Schedule);
        assert_eq!(wizard.error("preferred_days"), Some("Pick at least one day"));
    }

    #[test]
    fn test_toddler_rejected() {
        let mut survey = filled();
        survey.date_of_birth = Some(chrono::Utc::now().date_naive());
        let errors = survey.step_errors(SurveyStep::PersonalInfo);
        assert_eq!(
            errors.get("date_of_birth").map(String::as_str),
            Some("Students must be at least 4 years old")
        );
    }

    #[test]
    fn test_age_counts_birthday() {
        let born = NaiveDate::from_ymd_opt(2021, 12, 20).unwrap();
        let january = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
        assert_eq!(age_on(born, january), 4);
        assert_eq!(age_on(born, birthday), 4);
        assert_eq!(age_on(born, birthday.pred_opt().unwrap()), 3);

        let december_2022 = NaiveDate::from_ymd_opt(2022, 12, 5).unwrap();
        assert_eq!(age_on(december_2022, january), 3);
    }

    #[test]
    fn test_toggle_day_sorted() {
        let mut survey = EntranceSurvey::default();
        survey.toggle_day(5);
        survey.toggle_day(1);
        survey.toggle_day(9);
        assert_eq!(survey.preferred_days, vec![1, 5]);
        survey.toggle_day(5);
        assert_eq!(survey.preferred_days, vec![1]);
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["fullName"], "Tran Thi Mai");
        assert_eq!(json["dateOfBirth"], "2012-06-01");
        assert_eq!(json["preferredDays"], serde_json::json!([2, 4]));
    }
}
