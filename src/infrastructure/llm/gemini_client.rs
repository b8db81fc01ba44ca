use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerativeModel, GenerativeModelError};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// A hung remote call must error out through the transport; nothing above
// this layer carries a timeout of its own.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const LIST_PAGE_SIZE: &str = "200";

/// Gemini `generateContent` client. One request per completion attempt, the
/// credential travels only as the `key` query parameter of each call.
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    name: String,
}

impl GeminiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GenerativeModelError> {
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerativeModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerativeModelError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        Ok(response)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(DEFAULT_GEMINI_BASE_URL)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, GenerativeModelError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, model))
            .query(&[("key", api_key)])
            .timeout(REQUEST_TIMEOUT)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerativeModelError::ApiRequestFailed(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerativeModelError::InvalidResponse(e.to_string()))?;

        let text = completion
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerativeModelError::InvalidResponse(
                "empty candidates".to_string(),
            ));
        }

        Ok(text)
    }

    async fn list_models(&self, api_key: &str) -> Result<Vec<String>, GenerativeModelError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .query(&[("key", api_key), ("pageSize", LIST_PAGE_SIZE)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| GenerativeModelError::ApiRequestFailed(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let listing: ListModelsResponse = response
            .json()
            .await
            .map_err(|e| GenerativeModelError::InvalidResponse(e.to_string()))?;

        Ok(listing
            .models
            .into_iter()
            .map(|entry| match entry.name.strip_prefix("models/") {
                Some(stripped) => stripped.to_string(),
                None => entry.name,
            })
            .collect())
    }
}
