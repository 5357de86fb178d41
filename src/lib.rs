//! sunogen: Assemble structured Suno AI music prompts and translate them to English.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::AppContext;

pub use app::commands::generate::{GenerateOptions, GenerateOutcome, TRANSLATION_FAILURE_MESSAGE};
pub use domain::{
    AppError, Category, PromptLanguage, PromptMode, PromptRequest, SelectionSet,
};

/// Assemble a prompt without contacting the translation service.
///
/// Rejects an all-empty request with [`AppError::MissingInput`].
pub fn assemble(request: &PromptRequest) -> Result<String, AppError> {
    request.validate()?;
    Ok(domain::assemble(request))
}

/// Assemble a prompt and translate it through the Gemini API configured from
/// the environment (`GEMINI_API_KEY`).
pub fn generate(request: PromptRequest) -> Result<GenerateOutcome, AppError> {
    let translator = services::HttpGeminiTranslator::from_env()?;
    let ctx = AppContext::new(translator);
    app::commands::generate::execute(&ctx, &GenerateOptions { request, translate: true })
}
