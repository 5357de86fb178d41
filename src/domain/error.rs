use std::io;

use thiserror::Error;

/// Library-wide error type for sunogen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No category selected and no song description provided.
    #[error("Select at least one category or add a song description")]
    MissingInput,

    /// Required environment variable is not set.
    #[error("Environment variable {0} is not set")]
    EnvironmentVariableMissing(String),

    /// Translation API call failed.
    #[error("Translation request failed: {message}")]
    TranslationError { message: String, status: Option<u16> },

    /// Translation instruction template failed to render.
    #[error("Failed to render translation template: {0}")]
    TemplateError(String),

    /// System clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Reading interactive form input failed.
    #[error("Failed to read form input: {0}")]
    FormInput(String),

    /// Category name is not one of the fixed twelve.
    #[error("Unknown category '{0}'")]
    InvalidCategory(String),

    /// Prompt mode string is invalid.
    #[error("Invalid prompt mode '{0}': must be 'simple' or 'detailed'")]
    InvalidMode(String),

    /// Prompt language string is invalid.
    #[error("Invalid language '{0}': must be 'vi' or 'en'")]
    InvalidLanguage(String),
}
