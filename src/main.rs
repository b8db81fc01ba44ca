use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use adliye::application::ports::{FileLoader, GenerativeModel};
use adliye::application::services::{
    DocumentService, MetadataExtractor, PromptBuilder, QueryService,
};
use adliye::domain::ContentType;
use adliye::infrastructure::llm::{GeminiClient, MockGenerativeModel};
use adliye::infrastructure::observability::{init_tracing, TracingConfig};
use adliye::infrastructure::text_processing::{
    CompositeFileLoader, MockFileLoader, PdfAdapter, UdfAdapter,
};
use adliye::presentation::{create_router, AppState, ScaffoldConfig, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    let scaffold = ScaffoldConfig::default();

    init_tracing(TracingConfig::default());

    if settings.llm.api_key.is_empty() && !scaffold.enabled {
        tracing::warn!("GEMINI_API_KEY not set; query endpoints will report a missing credential");
    }

    if scaffold.enabled {
        tracing::warn!("Scaffold mode enabled: serving mock extraction and completions");
        let state = build_state(
            Arc::new(MockFileLoader),
            Arc::new(MockGenerativeModel::new()),
            settings,
        );
        serve(state).await
    } else {
        let file_loader = CompositeFileLoader::new(vec![
            (
                ContentType::Udf,
                Arc::new(UdfAdapter::new()) as Arc<dyn FileLoader>,
            ),
            (
                ContentType::Pdf,
                Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>,
            ),
        ]);
        let model = GeminiClient::new(&settings.llm.base_url);
        let state = build_state(Arc::new(file_loader), Arc::new(model), settings);
        serve(state).await
    }
}

fn build_state<F, G>(file_loader: Arc<F>, model: Arc<G>, settings: Settings) -> AppState<F, G>
where
    F: FileLoader,
    G: GenerativeModel,
{
    AppState {
        document_service: Arc::new(DocumentService::new(file_loader)),
        metadata_extractor: Arc::new(MetadataExtractor::new(
            settings.extraction.header_scan_lines,
        )),
        query_service: Arc::new(QueryService::new(
            Arc::clone(&model),
            settings.llm.model_preference.clone(),
        )),
        prompt_builder: Arc::new(PromptBuilder::new(settings.llm.max_document_chars)),
        generative_model: model,
        settings,
    }
}

async fn serve<F, G>(state: AppState<F, G>) -> anyhow::Result<()>
where
    F: FileLoader + 'static,
    G: GenerativeModel + 'static,
{
    let addr: SocketAddr =
        format!("{}:{}", state.settings.server.host, state.settings.server.port).parse()?;
    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
