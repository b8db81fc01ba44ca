use std::sync::Arc;

use crate::application::ports::{FileLoader, GenerativeModel};
use crate::application::services::{
    DocumentService, MetadataExtractor, PromptBuilder, QueryService,
};
use crate::presentation::config::Settings;

pub struct AppState<F, G>
where
    F: FileLoader,
    G: GenerativeModel,
{
    pub document_service: Arc<DocumentService<F>>,
    pub metadata_extractor: Arc<MetadataExtractor>,
    pub query_service: Arc<QueryService<G>>,
    pub prompt_builder: Arc<PromptBuilder>,
    pub generative_model: Arc<G>,
    pub settings: Settings,
}

impl<F, G> Clone for AppState<F, G>
where
    F: FileLoader,
    G: GenerativeModel,
{
    fn clone(&self) -> Self {
        Self {
            document_service: Arc::clone(&self.document_service),
            metadata_extractor: Arc::clone(&self.metadata_extractor),
            query_service: Arc::clone(&self.query_service),
            prompt_builder: Arc::clone(&self.prompt_builder),
            generative_model: Arc::clone(&self.generative_model),
            settings: self.settings.clone(),
        }
    }
}
