use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::application::ports::{FileLoader, GenerativeModel};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::answer_response;

#[derive(Deserialize)]
pub struct StatuteRequest {
    /// Statute article to look up, e.g. "TBK 344".
    pub reference: String,
}

/// Statute text lookup; works without any uploaded document.
#[tracing::instrument(skip(state, request))]
pub async fn statute_handler<F, G>(
    State(state): State<AppState<F, G>>,
    Json(request): Json<StatuteRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: GenerativeModel + 'static,
{
    tracing::debug!(reference = %sanitize_prompt(&request.reference), "Processing statute lookup");

    let prompt = state.prompt_builder.statute_lookup(&request.reference);

    answer_response(
        state
            .query_service
            .query(&prompt, &state.settings.llm.api_key)
            .await,
    )
}
