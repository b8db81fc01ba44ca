/// Outcome of extracting text from one uploaded document.
///
/// `Extracted` always carries non-empty text; the ingestion service refuses
/// to wrap a blank result in it. `Empty` means the bytes parsed fine but held
/// no text (a scanned image, typically), which keeps document-independent
/// features usable. `Failed` means the bytes could not be parsed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentText {
    Extracted { content: String },
    Empty { diagnostic: String },
    Failed { diagnostic: String },
}

impl DocumentText {
    pub fn is_extracted(&self) -> bool {
        matches!(self, Self::Extracted { .. })
    }

    /// Extracted text, if any.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Extracted { content } => Some(content),
            _ => None,
        }
    }

    /// Human-readable explanation for the non-extracted states.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Extracted { .. } => None,
            Self::Empty { diagnostic } | Self::Failed { diagnostic } => Some(diagnostic),
        }
    }
}
