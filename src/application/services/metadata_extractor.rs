use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{CaseMetadata, DocumentText, COURT_NOT_DETERMINED, FIELD_NOT_FOUND};

/// Header lines scanned for the court name. Filings put the court in the
/// caption; scanning further risks picking up citations of other courts.
pub const DEFAULT_HEADER_SCAN_LINES: usize = 40;

const MIN_COURT_LINE_CHARS: usize = 5;

static CASE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Esas\s*No\s*[:\-]?\s*(\d{4}/\d+)").unwrap());
static DECISION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Karar\s*No\s*[:\-]?\s*(\d{4}/\d+)").unwrap());
// Both separators must be the same character; the regex crate has no
// backreferences, hence the two branches.
static DECISION_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}\.\d{1,2}\.\d{4}|\d{1,2}/\d{1,2}/\d{4}").unwrap());

/// Derives `CaseMetadata` from extracted document text.
///
/// Pattern search is first-match-wins throughout. A document citing several
/// dates or docket numbers may well match the wrong one first; that ambiguity
/// is inherent to the heuristic and callers are expected to let users
/// override the result.
pub struct MetadataExtractor {
    header_scan_lines: usize,
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_SCAN_LINES)
    }
}

impl MetadataExtractor {
    pub fn new(header_scan_lines: usize) -> Self {
        Self { header_scan_lines }
    }

    /// Non-extracted input yields all sentinels; diagnostics are never
    /// scanned for patterns.
    pub fn extract(&self, text: &DocumentText) -> CaseMetadata {
        let Some(content) = text.content() else {
            return CaseMetadata::default();
        };

        CaseMetadata {
            court_name: self
                .court_name(content)
                .unwrap_or_else(|| COURT_NOT_DETERMINED.to_string()),
            case_number: first_capture(&CASE_NUMBER, content)
                .unwrap_or_else(|| FIELD_NOT_FOUND.to_string()),
            decision_number: first_capture(&DECISION_NUMBER, content)
                .unwrap_or_else(|| FIELD_NOT_FOUND.to_string()),
            decision_date: DECISION_DATE
                .find(content)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| FIELD_NOT_FOUND.to_string()),
        }
    }

    fn court_name(&self, content: &str) -> Option<String> {
        for line in content.lines().take(self.header_scan_lines) {
            let trimmed = line.trim();
            if trimmed.chars().count() <= MIN_COURT_LINE_CHARS {
                continue;
            }
            let upper = trimmed.to_uppercase();
            if upper.contains("MAHKEMESİ") || upper.contains("DAİRESİ") {
                return Some(trimmed.to_string());
            }
        }
        None
    }
}

fn first_capture(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
