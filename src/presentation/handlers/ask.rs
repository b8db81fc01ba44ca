use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::application::ports::{FileLoader, GenerativeModel};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::answer_response;

#[derive(Deserialize)]
pub struct AskRequest {
    pub question: String,
    /// Extracted text of the document under discussion. The service holds no
    /// session, so each request carries it.
    pub document_text: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn ask_handler<F, G>(
    State(state): State<AppState<F, G>>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: GenerativeModel + 'static,
{
    tracing::debug!(question = %sanitize_prompt(&request.question), "Processing document question");

    let prompt = state
        .prompt_builder
        .document_question(&request.document_text, &request.question);

    answer_response(
        state
            .query_service
            .query(&prompt, &state.settings.llm.api_key)
            .await,
    )
}
