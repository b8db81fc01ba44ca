/// Placeholder when no header line identified the court.
pub const COURT_NOT_DETERMINED: &str = "Not determined";

/// Placeholder when a numeric or date pattern was absent from the text.
pub const FIELD_NOT_FOUND: &str = "Not found";

/// Structured header data derived from one document's extracted text.
///
/// A pure function of the text: recomputed on demand, never stored. Fields
/// that could not be derived hold their sentinel so the caller can always
/// render something, and "absent" stays distinguishable from an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseMetadata {
    pub court_name: String,
    /// Docket identifier in `year/sequence` form, e.g. `2023/145`.
    pub case_number: String,
    pub decision_number: String,
    pub decision_date: String,
}

impl Default for CaseMetadata {
    fn default() -> Self {
        Self {
            court_name: COURT_NOT_DETERMINED.to_string(),
            case_number: FIELD_NOT_FOUND.to_string(),
            decision_number: FIELD_NOT_FOUND.to_string(),
            decision_date: FIELD_NOT_FOUND.to_string(),
        }
    }
}
