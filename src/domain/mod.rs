pub mod category;
pub mod config;
pub mod error;
pub mod language;
pub mod prompt_assembly;
pub mod selection;
pub mod vocabulary;

pub use category::Category;
pub use config::{GEMINI_API_KEY_ENV, GeminiApiConfig};
pub use error::AppError;
pub use language::PromptLanguage;
pub use prompt_assembly::{INSTRUMENTAL_TAG, assemble};
pub use selection::{PromptMode, PromptRequest, SelectionSet};
