use async_trait::async_trait;

/// Boundary to the remote generative language service.
///
/// Both calls are opaque RPCs: one completion attempt against a named model
/// variant, and an optional listing of the variants currently served. The
/// credential travels with each call and is never retained.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, GenerativeModelError>;

    async fn list_models(&self, api_key: &str) -> Result<Vec<String>, GenerativeModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerativeModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
