mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    ExtractionSettings, LlmSettings, ServerSettings, Settings, DEFAULT_MODEL_PREFERENCE,
};
