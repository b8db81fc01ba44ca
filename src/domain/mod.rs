mod case_metadata;
mod document;
mod document_text;

pub use case_metadata::{CaseMetadata, COURT_NOT_DETERMINED, FIELD_NOT_FOUND};
pub use document::{ContentType, Document, DocumentId};
pub use document_text::DocumentText;
