use std::sync::Arc;

use crate::application::ports::{GenerativeModel, GenerativeModelError};

use super::model_resolver::resolve_candidates;

/// One successful completion, tagged with the candidate that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnswer {
    pub text: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("credential required")]
    CredentialMissing,
    #[error("all model candidates failed (attempted: {}): {last_error}", .attempted.join(", "))]
    AllCandidatesExhausted {
        attempted: Vec<String>,
        last_error: String,
    },
}

/// Issues one completion against the remote service, falling back across
/// model candidates in preference order.
///
/// Candidates are attempted sequentially, never concurrently; each attempt
/// may bill, and the policy is cheapest successful attempt. The loop is
/// bounded by the candidate list, with no backoff between attempts and no
/// re-query after exhaustion. Prompts pass through opaque: truncation is the
/// caller's job before the text gets here.
pub struct QueryService<G>
where
    G: GenerativeModel,
{
    model: Arc<G>,
    preference: Vec<String>,
}

impl<G> QueryService<G>
where
    G: GenerativeModel,
{
    pub fn new(model: Arc<G>, preference: Vec<String>) -> Self {
        Self { model, preference }
    }

    #[tracing::instrument(skip_all)]
    pub async fn query(&self, prompt: &str, api_key: &str) -> Result<QueryAnswer, QueryError> {
        if api_key.trim().is_empty() {
            return Err(QueryError::CredentialMissing);
        }

        let live = match self.model.list_models(api_key).await {
            Ok(models) => Some(models),
            Err(e) => {
                tracing::warn!(error = %e, "Model listing unavailable, using configured order");
                None
            }
        };

        let candidates = resolve_candidates(&self.preference, live.as_deref());

        let mut last_error: Option<GenerativeModelError> = None;
        for candidate in &candidates {
            match self.model.generate(candidate, api_key, prompt).await {
                Ok(text) => {
                    tracing::debug!(model = %candidate, "Completion succeeded");
                    return Ok(QueryAnswer {
                        text,
                        model: candidate.clone(),
                    });
                }
                Err(e) => {
                    tracing::warn!(model = %candidate, error = %e, "Candidate failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(QueryError::AllCandidatesExhausted {
            attempted: candidates,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no model candidates configured".to_string()),
        })
    }
}
