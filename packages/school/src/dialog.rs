//! Visibility state of the confirmation and loading dialogs.
//!
//! Both dialogs walk the same path:
//! `Closed -> AwaitingConfirmation -> Submitting -> Closed | ResultShown`.
//! Neither retries nor rolls back; the wrapped action reports its own errors.
//! Form dialogs map their submit result through [`SubmitOutcome`].

use crate::action::ActionResult;

/// Where a dialog-wrapped action currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogPhase {
    #[default]
    Closed,
    AwaitingConfirmation,
    Submitting,
    ResultShown,
}

/// Lifecycle of one form submission or data request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetcherState<T> {
    #[default]
    Idle,
    Submitting,
    Done(T),
}

impl<T> FetcherState<T> {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FetcherState::Submitting)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            FetcherState::Done(result) => Some(result),
            _ => None,
        }
    }
}

/// Confirmation step in front of a mutating action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmDialog {
    phase: DialogPhase,
}

impl ConfirmDialog {
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::AwaitingConfirmation
    }

    pub fn open(&mut self) {
        self.phase = DialogPhase::AwaitingConfirmation;
    }

    pub fn cancel(&mut self) {
        self.phase = DialogPhase::Closed;
    }

    /// Close the dialog and report whether the confirm callback should run.
    ///
    /// Only the first confirm of an open dialog returns `true`, so a double
    /// click cannot fire the action twice.
    pub fn confirm(&mut self) -> bool {
        if self.is_open() {
            self.phase = DialogPhase::Closed;
            true
        } else {
            false
        }
    }
}

/// Busy/result dialog that follows a fetcher.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingDialog {
    phase: DialogPhase,
    action_ran: bool,
}

/// What the loading dialog wants the caller to do after observing a fetcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingOutcome {
    None,
    /// A successful result arrived; run the caller's follow-up action once.
    RunAction,
}

impl LoadingDialog {
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, DialogPhase::Submitting | DialogPhase::ResultShown)
    }

    /// Feed the fetcher's current state. `success` reads the boolean flag of
    /// the caller's result.
    pub fn observe<T>(
        &mut self,
        state: &FetcherState<T>,
        success: impl Fn(&T) -> bool,
    ) -> LoadingOutcome {
        match state {
            FetcherState::Idle => LoadingOutcome::None,
            FetcherState::Submitting => {
                self.phase = DialogPhase::Submitting;
                self.action_ran = false;
                LoadingOutcome::None
            }
            FetcherState::Done(result) => {
                if self.phase == DialogPhase::Closed {
                    return LoadingOutcome::None;
                }
                self.phase = DialogPhase::ResultShown;
                if success(result) && !self.action_ran {
                    self.action_ran = true;
                    LoadingOutcome::RunAction
                } else {
                    LoadingOutcome::None
                }
            }
        }
    }

    pub fn close(&mut self) {
        self.phase = DialogPhase::Closed;
    }
}

/// What a form dialog does once its submit has answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Confirm with the message and close the dialog.
    Saved(String),
    /// Warn with the backend's message; the dialog stays open with its values.
    Refused(String),
}

impl SubmitOutcome {
    /// Decide from the `success` flag alone. A successful action may carry
    /// no data.
    pub fn of<T>(result: &ActionResult<T>, saved: impl Into<String>, fallback: &str) -> Self {
        if result.success {
            SubmitOutcome::Saved(saved.into())
        } else {
            SubmitOutcome::Refused(result.error_message().unwrap_or(fallback).to_string())
        }
    }

    pub fn closes(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }

    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Saved(message) | SubmitOutcome::Refused(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ApiError;

    #[test]
    fn test_confirm_fires_once() {
        let mut dialog = ConfirmDialog::default();
        assert!(!dialog.confirm());
        dialog.open();
        assert!(dialog.is_open());
        assert!(dialog.confirm());
        assert_eq!(dialog.phase(), DialogPhase::Closed);
        assert!(!dialog.confirm());
    }

    #[test]
    fn test_cancel_closes_without_firing() {
        let mut dialog = ConfirmDialog::default();
        dialog.open();
        dialog.cancel();
        assert!(!dialog.is_open());
        assert!(!dialog.confirm());
    }

    #[test]
    fn test_loading_opens_on_submit_and_waits_for_result() {
        let mut dialog = LoadingDialog::default();
        let idle: FetcherState<ActionResult<()>> = FetcherState::Idle;
        dialog.observe(&idle, |r| r.success);
        assert!(!dialog.is_open());

        dialog.observe(&FetcherState::<ActionResult<()>>::Submitting, |r| r.success);
        assert!(dialog.is_open());
        assert_eq!(dialog.phase(), DialogPhase::Submitting);

        let failed = FetcherState::Done(ActionResult::<()>::failure(ApiError::new(400, "nope")));
        assert_eq!(dialog.observe(&failed, |r| r.success), LoadingOutcome::None);
        assert!(dialog.is_open());
        assert_eq!(dialog.phase(), DialogPhase::ResultShown);
    }

    #[test]
    fn test_action_runs_once_on_success() {
        let mut dialog = LoadingDialog::default();
        dialog.observe(&FetcherState::<ActionResult<u8>>::Submitting, |r| r.success);
        let done = FetcherState::Done(ActionResult::ok(1u8));
        assert_eq!(dialog.observe(&done, |r| r.success), LoadingOutcome::RunAction);
        // re-renders observe the same result again
        assert_eq!(dialog.observe(&done, |r| r.success), LoadingOutcome::None);

        dialog.close();
        assert!(!dialog.is_open());
        assert_eq!(dialog.observe(&done, |r| r.success), LoadingOutcome::None);
    }

    #[test]
    fn test_saved_without_data_closes() {
        let created: ActionResult<u8> = ActionResult::completed(None);
        let outcome = SubmitOutcome::of(&created, "Room created", "Could not save room");
        assert!(outcome.closes());
        assert_eq!(outcome.message(), "Room created");
    }

    #[test]
    fn test_refusal_keeps_dialog_open() {
        let refused: ActionResult<u8> = ActionResult::failure(ApiError::new(400, "Capacity exceeded"));
        let outcome = SubmitOutcome::of(&refused, "Room created", "Could not save room");
        assert_eq!(outcome, SubmitOutcome::Refused("Capacity exceeded".into()));
        assert!(!outcome.closes());

        let silent: ActionResult<u8> = ActionResult {
            success: false,
            data: None,
            error: None,
            status: None,
        };
        assert_eq!(SubmitOutcome::of(&silent, "", "Could not save room").message(), "Could not save room");
    }
}
