use std::future::Future;

use dioxus::prelude::*;
use school::{JobProgress, ProgressTracker};

use crate::config::use_school_config;
use crate::timer::sleep;

/// Handle returned by [`use_job_progress`].
#[derive(Clone, Copy, PartialEq)]
pub struct JobPoller {
    pub tracker: Signal<ProgressTracker>,
    pub active: Signal<bool>,
    start: Callback<()>,
}

impl JobPoller {
    /// Start polling from scratch. Ignored while a poll loop is running.
    pub fn start(&self) {
        self.start.call(());
    }
}

/// Poll a job's progress endpoint on the configured interval until the job
/// completes or fails. A failed poll ends the loop as a failure; there is no
/// automatic retry.
pub fn use_job_progress<F, Fut>(poll: F) -> JobPoller
where
    F: Fn() -> Fut + Copy + 'static,
    Fut: Future<Output = Result<JobProgress, ServerFnError>> + 'static,
{
    let config = use_school_config();
    let mut tracker = use_signal(ProgressTracker::default);
    let mut active = use_signal(|| false);

    let start = use_callback(move |()| {
        if *active.peek() {
            return;
        }
        tracker.set(ProgressTracker::default());
        active.set(true);
        let interval = config.peek().progress.poll_interval();

        spawn(async move {
            loop {
                let snapshot = match poll().await {
                    Ok(snapshot) => snapshot,
                    Err(e) => JobProgress::Failed {
                        message: e.to_string(),
                    },
                };
                if tracker.write().update(snapshot) {
                    tracing::info!("Job finished: {:?}", tracker.peek().state());
                    active.set(false);
                    break;
                }
                sleep(interval).await;
            }
        });
    });

    JobPoller {
        tracker,
        active,
        start,
    }
}

/// Progress bar with the job's latest message.
#[component]
pub fn ProgressBar(tracker: Signal<ProgressTracker>) -> Element {
    let tracker = tracker.read();
    let percent = tracker.percent();
    let (class, message) = match tracker.state() {
        JobProgress::Running { message, .. } => ("progress", message.clone()),
        JobProgress::Completed { message } => ("progress done", message.clone()),
        JobProgress::Failed { message } => ("progress failed", Some(message.clone())),
    };

    rsx! {
        div {
            class: "{class}",
            div { class: "progress-track", div { class: "progress-fill", style: "width: {percent}%" } }
            span { class: "progress-label", "{percent}%" }
            if let Some(message) = message {
                span { class: "progress-message", "{message}" }
            }
        }
    }
}
