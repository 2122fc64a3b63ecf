//! Public entrance survey submission.

use dioxus::prelude::*;
use school::{ActionResult, EntranceSurvey};

/// Submit a completed entrance survey. Needs no session.
#[cfg(feature = "server")]
#[post("/api/surveys/entrance")]
pub async fn submit_entrance_survey(
    survey: EntranceSurvey,
) -> Result<ActionResult<()>, ServerFnError> {
    use crate::backend::{into_action, BackendClient};

    if let Some(rejected) = school::forms::reject_invalid(&survey) {
        return Ok(rejected);
    }
    let client = BackendClient::anonymous().await;
    let result = client
        .post::<_, serde_json::Value>("/surveys/entrance", &survey)
        .await
        .map(|_| ());
    if result.is_ok() {
        tracing::info!("Entrance survey received from {}", survey.email);
    }
    Ok(into_action(result))
}

#[cfg(not(feature = "server"))]
#[post("/api/surveys/entrance")]
pub async fn submit_entrance_survey(
    survey: EntranceSurvey,
) -> Result<ActionResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
