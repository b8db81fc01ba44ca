mod gemini_client;
mod mock_generative_model;

pub use gemini_client::{GeminiClient, DEFAULT_GEMINI_BASE_URL};
pub use mock_generative_model::MockGenerativeModel;
