//! Progress of long-running backend jobs, such as arranging students into classes.
//!
//! The backend reports a snapshot on each poll. [`ProgressTracker`] folds the
//! snapshots into a single view: the percentage never moves backwards, and
//! once a terminal state is reached further snapshots are ignored.

use serde::{Deserialize, Serialize};

/// Snapshot returned by a progress endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum JobProgress {
    Running {
        #[serde(default)]
        percent: u8,
        #[serde(default)]
        message: Option<String>,
    },
    Completed {
        #[serde(default)]
        message: Option<String>,
    },
    Failed {
        message: String,
    },
}

impl JobProgress {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobProgress::Running { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressTracker {
    state: JobProgress,
    reached: u8,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self {
            state: JobProgress::Running {
                percent: 0,
                message: None,
            },
            reached: 0,
        }
    }
}

impl ProgressTracker {
    pub fn state(&self) -> &JobProgress {
        &self.state
    }

    /// Percentage to draw, 100 once completed. A failed job keeps the last
    /// percentage it reached.
    pub fn percent(&self) -> u8 {
        match &self.state {
            JobProgress::Completed { .. } => 100,
            JobProgress::Running { .. } | JobProgress::Failed { .. } => self.reached,
        }
    }

    /// Whether polling should continue.
    pub fn is_polling(&self) -> bool {
        !self.state.is_terminal()
    }

    /// Fold in a new snapshot. Returns `true` when the tracker just reached a
    /// terminal state.
    pub fn update(&mut self, snapshot: JobProgress) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.state = match snapshot {
            JobProgress::Running { percent, message } => {
                self.reached = percent.min(100).max(self.reached);
                JobProgress::Running {
                    percent: self.reached,
                    message,
                }
            }
            terminal => terminal,
        };
        self.state.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(percent: u8) -> JobProgress {
        JobProgress::Running {
            percent,
            message: None,
        }
    }

    #[test]
    fn test_percent_never_regresses() {
        let mut tracker = ProgressTracker::default();
        tracker.update(running(40));
        tracker.update(running(25));
        assert_eq!(tracker.percent(), 40);
        tracker.update(running(250));
        assert_eq!(tracker.percent(), 100);
        assert!(tracker.is_polling());
    }

    #[test]
    fn test_terminal_state_is_sticky() {
        let mut tracker = ProgressTracker::default();
        assert!(tracker.update(JobProgress::Failed {
            message: "No teacher available".into()
        }));
        assert!(!tracker.is_polling());
        assert!(!tracker.update(running(50)));
        assert_eq!(tracker.percent(), 0);
        assert!(matches!(tracker.state(), JobProgress::Failed { .. }));
    }

    #[test]
    fn test_failure_keeps_reached_percent() {
        let mut tracker = ProgressTracker::default();
        tracker.update(running(80));
        assert!(tracker.update(JobProgress::Failed {
            message: "Room capacity exceeded".into()
        }));
        assert_eq!(tracker.percent(), 80);
        assert!(!tracker.update(running(90)));
        assert_eq!(tracker.percent(), 80);
    }

    #[test]
    fn test_deserialize_snapshot() {
        let snapshot: JobProgress =
            serde_json::from_str(r#"{"status":"running","percent":35}"#).unwrap();
        assert_eq!(snapshot, running(35));
        let done: JobProgress = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
        assert!(done.is_terminal());
    }
}
