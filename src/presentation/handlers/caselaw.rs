use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::application::ports::{FileLoader, GenerativeModel};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::answer_response;

#[derive(Deserialize)]
pub struct CaseLawRequest {
    /// Legal topic to summarize precedent for.
    pub topic: String,
}

/// Case-law summary; works without any uploaded document.
#[tracing::instrument(skip(state, request))]
pub async fn caselaw_handler<F, G>(
    State(state): State<AppState<F, G>>,
    Json(request): Json<CaseLawRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: GenerativeModel + 'static,
{
    tracing::debug!(topic = %sanitize_prompt(&request.topic), "Processing case-law summary");

    let prompt = state.prompt_builder.case_law_summary(&request.topic);

    answer_response(
        state
            .query_service
            .query(&prompt, &state.settings.llm.api_key)
            .await,
    )
}
