use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, DocumentText};

const NO_TEXT_DIAGNOSTIC: &str = "no extractable text (document may be a scanned image)";

/// Ingestion entry point: raw bytes plus a filename in, a `DocumentText` out.
///
/// Adapter failures are folded into the three-state result rather than
/// propagated, so the caller always has something renderable. Extraction
/// errors are terminal for a given document; the input bytes are fixed, so
/// nothing here retries.
pub struct DocumentService<F>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
}

impl<F> DocumentService<F>
where
    F: FileLoader,
{
    pub fn new(file_loader: Arc<F>) -> Self {
        Self { file_loader }
    }

    #[tracing::instrument(skip(self, data), fields(filename = %filename, bytes = data.len()))]
    pub async fn load(&self, data: &[u8], filename: &str) -> DocumentText {
        let extension = filename.rsplit('.').next().unwrap_or_default();
        let Some(content_type) = ContentType::from_extension(extension) else {
            tracing::warn!(extension = %extension, "Unrecognized file extension");
            return DocumentText::Failed {
                diagnostic: format!("unrecognized file extension: {extension}"),
            };
        };

        let document = Document::new(filename.to_string(), content_type, data.len() as u64);

        match self.file_loader.extract_text(data, &document).await {
            Ok(text) if text.trim().is_empty() => DocumentText::Empty {
                diagnostic: NO_TEXT_DIAGNOSTIC.to_string(),
            },
            Ok(text) => {
                tracing::debug!(chars = text.chars().count(), "Text extraction complete");
                DocumentText::Extracted { content: text }
            }
            Err(FileLoaderError::NoTextFound(filename)) => {
                tracing::info!(filename = %filename, "Document parsed but carried no text");
                DocumentText::Empty {
                    diagnostic: NO_TEXT_DIAGNOSTIC.to_string(),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Text extraction failed");
                DocumentText::Failed {
                    diagnostic: e.to_string(),
                }
            }
        }
    }
}
