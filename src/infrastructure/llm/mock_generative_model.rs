use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{GenerativeModel, GenerativeModelError};

const DEFAULT_ANSWER: &str = "Mock answer";

/// Scripted backend for tests and scaffold mode.
///
/// Unscripted models answer with a fixed string; `answering`/`failing`
/// override that per model. Every call is recorded so tests can assert on
/// attempt order and on the absence of network activity.
#[derive(Default)]
pub struct MockGenerativeModel {
    outcomes: HashMap<String, Result<String, String>>,
    listing: Option<Vec<String>>,
    generate_calls: Mutex<Vec<String>>,
    list_calls: AtomicUsize,
}

impl MockGenerativeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(mut self, model: &str, answer: &str) -> Self {
        self.outcomes
            .insert(model.to_string(), Ok(answer.to_string()));
        self
    }

    pub fn failing(mut self, model: &str, error: &str) -> Self {
        self.outcomes
            .insert(model.to_string(), Err(error.to_string()));
        self
    }

    /// Make `list_models` succeed with the given identifiers. Without this
    /// the listing call fails, exercising the static-order fallback.
    pub fn with_listing(mut self, models: &[&str]) -> Self {
        self.listing = Some(models.iter().map(|m| m.to_string()).collect());
        self
    }

    /// Models passed to `generate`, in call order.
    pub fn generate_calls(&self) -> Vec<String> {
        self.generate_calls.lock().unwrap().clone()
    }

    /// Total calls that would have touched the network.
    pub fn network_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst) + self.generate_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeModel for MockGenerativeModel {
    async fn generate(
        &self,
        model: &str,
        _api_key: &str,
        _prompt: &str,
    ) -> Result<String, GenerativeModelError> {
        self.generate_calls.lock().unwrap().push(model.to_string());

        match self.outcomes.get(model) {
            Some(Ok(answer)) => Ok(answer.clone()),
            Some(Err(message)) => Err(GenerativeModelError::ApiRequestFailed(message.clone())),
            None => Ok(DEFAULT_ANSWER.to_string()),
        }
    }

    async fn list_models(&self, _api_key: &str) -> Result<Vec<String>, GenerativeModelError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        match &self.listing {
            Some(models) => Ok(models.clone()),
            None => Err(GenerativeModelError::ApiRequestFailed(
                "listing unavailable".to_string(),
            )),
        }
    }
}
