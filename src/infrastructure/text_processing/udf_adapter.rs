use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const CONTENT_ENTRY: &str = "content.xml";

/// Extracts text from UDF containers: zip archives holding a `content.xml`
/// word-processor document. Text and CDATA payloads are concatenated in
/// document order, single-space separated.
#[derive(Default)]
pub struct UdfAdapter;

impl UdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_content(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("invalid archive: {e}")))?;

        let mut entry = archive.by_name(CONTENT_ENTRY).map_err(|_| {
            FileLoaderError::ExtractionFailed(format!("archive entry missing: {CONTENT_ENTRY}"))
        })?;

        let mut xml = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut xml)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("unreadable entry: {e}")))?;

        collect_text_nodes(&xml)
    }
}

fn collect_text_nodes(xml: &[u8]) -> Result<String, FileLoaderError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut parts: Vec<String> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(text)) => {
                let unescaped = text
                    .unescape()
                    .map_err(|e| FileLoaderError::ExtractionFailed(format!("malformed XML: {e}")))?;
                push_trimmed(&mut parts, &unescaped);
            }
            Ok(Event::CData(cdata)) => {
                push_trimmed(&mut parts, &String::from_utf8_lossy(&cdata));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(FileLoaderError::ExtractionFailed(format!(
                    "malformed XML: {e}"
                )));
            }
        }
        buf.clear();
    }

    Ok(parts.join(" "))
}

fn push_trimmed(parts: &mut Vec<String>, payload: &str) {
    let trimmed = payload.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}

#[async_trait]
impl FileLoader for UdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Udf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_extension().to_string(),
            ));
        }

        let text = Self::extract_content(data)?;
        tracing::debug!(chars = text.chars().count(), "UDF text extraction complete");

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
