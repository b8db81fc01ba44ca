use std::str::FromStr;

use serde::Deserialize;

use crate::application::services::{DEFAULT_HEADER_SCAN_LINES, DEFAULT_MAX_DOCUMENT_CHARS};
use crate::infrastructure::llm::DEFAULT_GEMINI_BASE_URL;

/// Model variants attempted in order when the caller configures nothing.
/// Cheapest first; the pro tier is the last resort.
pub const DEFAULT_MODEL_PREFERENCE: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1.5-flash-8b",
    "gemini-1.5-pro",
];

const DEFAULT_MAX_FILE_SIZE_MB: usize = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model_preference: Vec<String>,
    pub max_document_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub header_scan_lines: usize,
    pub max_file_size_mb: usize,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 3000),
            },
            llm: LlmSettings {
                api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
                base_url: env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
                model_preference: model_preference_from_env(),
                max_document_chars: env_parsed("MAX_DOCUMENT_CHARS", DEFAULT_MAX_DOCUMENT_CHARS),
            },
            extraction: ExtractionSettings {
                header_scan_lines: env_parsed("HEADER_SCAN_LINES", DEFAULT_HEADER_SCAN_LINES),
                max_file_size_mb: env_parsed("MAX_FILE_SIZE_MB", DEFAULT_MAX_FILE_SIZE_MB),
            },
        }
    }
}

fn model_preference_from_env() -> Vec<String> {
    let configured: Vec<String> = std::env::var("GEMINI_MODELS")
        .map(|value| {
            value
                .split(',')
                .map(|model| model.trim().to_string())
                .filter(|model| !model.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if configured.is_empty() {
        return DEFAULT_MODEL_PREFERENCE
            .iter()
            .map(|m| m.to_string())
            .collect();
    }

    configured
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
