use crate::domain::AppError;

/// Port for the external translation collaborator.
pub trait Translator {
    /// Translate a Vietnamese prompt to English.
    fn translate(&self, vietnamese: &str) -> Result<String, AppError>;
}

/// Translator that performs no request. Used when translation is disabled;
/// calling it anyway is a bug and surfaces as an error.
pub struct NoopTranslator;

impl Translator for NoopTranslator {
    fn translate(&self, _vietnamese: &str) -> Result<String, AppError> {
        Err(AppError::TranslationError { message: "translation is disabled".to_string(), status: None })
    }
}
