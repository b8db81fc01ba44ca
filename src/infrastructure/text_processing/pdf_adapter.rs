use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Extracts text from PDF byte streams page by page, in page order.
///
/// Pages whose extraction errors or yields only whitespace are skipped; the
/// surviving page texts are newline-joined. A document where every page comes
/// back blank is reported as `NoTextFound`, not as a failure: the bytes were
/// a valid PDF, just a non-textual one (scans, mostly).
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let doc = PdfDocument::load_mem(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let mut pages = Vec::new();
        for page_number in doc.get_pages().keys() {
            let text = doc.extract_text(&[*page_number]).unwrap_or_default();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                pages.push(trimmed.to_string());
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_extension().to_string(),
            ));
        }

        let pages = Self::extract_pages(data)?;
        tracing::debug!(page_count = pages.len(), "PDF text extraction complete");

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(pages.join("\n"))
    }
}
