use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FileLoader, GenerativeModel};
use crate::domain::{CaseMetadata, ContentType, DocumentText};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct ExtractResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
    pub metadata: MetadataDto,
}

#[derive(Serialize)]
pub struct MetadataDto {
    pub court_name: String,
    pub case_number: String,
    pub decision_number: String,
    pub decision_date: String,
}

impl From<CaseMetadata> for MetadataDto {
    fn from(metadata: CaseMetadata) -> Self {
        Self {
            court_name: metadata.court_name,
            case_number: metadata.case_number,
            decision_number: metadata.decision_number,
            decision_date: metadata.decision_date,
        }
    }
}

/// Upload one UDF or PDF document; the response carries the extraction state
/// and the derived case metadata. An extraction failure is still a
/// renderable result, so it maps to 200, not to a server error.
#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler<F, G>(
    State(state): State<AppState<F, G>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: GenerativeModel + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Extract request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let extension = filename.rsplit('.').next().unwrap_or_default();
    if ContentType::from_extension(extension).is_none() {
        tracing::warn!(filename = %filename, "Unsupported upload extension");
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse {
                error: format!("unsupported file extension: {}", extension),
            }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    let max_bytes = state.settings.extraction.max_file_size_mb * 1024 * 1024;
    if data.len() > max_bytes {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse {
                error: format!(
                    "file exceeds the {} MB limit",
                    state.settings.extraction.max_file_size_mb
                ),
            }),
        )
            .into_response();
    }

    let text = state.document_service.load(&data, &filename).await;
    let metadata = state.metadata_extractor.extract(&text).into();

    let response = match text {
        DocumentText::Extracted { content } => ExtractResponse {
            status: "extracted",
            content: Some(content),
            diagnostic: None,
            metadata,
        },
        DocumentText::Empty { diagnostic } => ExtractResponse {
            status: "empty",
            content: None,
            diagnostic: Some(diagnostic),
            metadata,
        },
        DocumentText::Failed { diagnostic } => ExtractResponse {
            status: "failed",
            content: None,
            diagnostic: Some(diagnostic),
            metadata,
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}
