use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FileLoader, GenerativeModel};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// Live listing of the model variants the remote service currently serves.
#[tracing::instrument(skip(state))]
pub async fn models_handler<F, G>(State(state): State<AppState<F, G>>) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: GenerativeModel + 'static,
{
    let api_key = &state.settings.llm.api_key;
    if api_key.trim().is_empty() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "credential required".to_string(),
            }),
        )
            .into_response();
    }

    match state.generative_model.list_models(api_key).await {
        Ok(models) => (StatusCode::OK, Json(ModelsResponse { models })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Model listing failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
