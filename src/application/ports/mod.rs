mod file_loader;
mod generative_model;

pub use file_loader::{FileLoader, FileLoaderError};
pub use generative_model::{GenerativeModel, GenerativeModelError};
