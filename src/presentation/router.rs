use axum::extract::{DefaultBodyLimit, Request};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use crate::application::ports::{FileLoader, GenerativeModel};
use crate::presentation::handlers::{
    ask_handler, caselaw_handler, extract_handler, health_handler, models_handler,
    statute_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, G>(state: AppState<F, G>) -> Router
where
    F: FileLoader + 'static,
    G: GenerativeModel + 'static,
{
    // Slack for multipart framing, so the handler's own size check is the
    // one that fires on oversized documents.
    let body_limit =
        DefaultBodyLimit::max(state.settings.extraction.max_file_size_mb * 1024 * 1024 + 4096);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                request_id = %Uuid::new_v4(),
                method = %request.method(),
                uri = %request.uri().path()
            )
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/extract", post(extract_handler::<F, G>))
        .route("/api/v1/ask", post(ask_handler::<F, G>))
        .route("/api/v1/statute", post(statute_handler::<F, G>))
        .route("/api/v1/caselaw", post(caselaw_handler::<F, G>))
        .route("/api/v1/models", get(models_handler::<F, G>))
        .layer(body_limit)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
