mod ask;
mod caselaw;
mod extract;
mod health;
mod models;
mod statute;

pub use ask::ask_handler;
pub use caselaw::caselaw_handler;
pub use extract::extract_handler;
pub use health::health_handler;
pub use models::models_handler;
pub use statute::statute_handler;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::services::{QueryAnswer, QueryError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub model: String,
}

/// Common mapping from a query outcome to an HTTP response: a missing
/// credential is the caller's configuration problem, exhaustion is the
/// remote service's.
fn answer_response(result: Result<QueryAnswer, QueryError>) -> Response {
    match result {
        Ok(answer) => (
            StatusCode::OK,
            Json(AnswerResponse {
                answer: answer.text,
                model: answer.model,
            }),
        )
            .into_response(),
        Err(QueryError::CredentialMissing) => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: QueryError::CredentialMissing.to_string(),
            }),
        )
            .into_response(),
        Err(e @ QueryError::AllCandidatesExhausted { .. }) => {
            tracing::error!(error = %e, "Query failed across all candidates");
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
