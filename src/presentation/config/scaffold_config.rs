/// Configuration for scaffold mode: mock extraction and completions, so the
/// HTTP surface can be exercised without a Gemini credential.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    pub enabled: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            enabled: std::env::var("SCAFFOLD_MODE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
