use crate::app::AppContext;
use crate::domain::{AppError, PromptRequest, assemble};
use crate::ports::Translator;

/// Fixed user-visible text shown as the English prompt when translation fails.
pub const TRANSLATION_FAILURE_MESSAGE: &str = "Translation failed. Please try again.";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub request: PromptRequest,
    /// When false the translator is never contacted.
    pub translate: bool,
}

/// The two prompt variants, immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Original-language prompt.
    pub vietnamese: String,
    /// Translated prompt, or the fixed failure message when the translation
    /// call failed. `None` when translation was not attempted.
    pub english: Option<String>,
}

/// Execute the generate command: validate, assemble, then translate.
///
/// A translator failure never fails the command; it is logged and replaced by
/// [`TRANSLATION_FAILURE_MESSAGE`], leaving the Vietnamese prompt usable.
pub fn execute<T: Translator>(
    ctx: &AppContext<T>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    options.request.validate()?;

    let vietnamese = assemble(&options.request);

    let english = if options.translate && !vietnamese.is_empty() {
        match ctx.translator().translate(&vietnamese) {
            Ok(text) => Some(text),
            Err(err) => {
                eprintln!("⚠️  Translation failed: {}", err);
                Some(TRANSLATION_FAILURE_MESSAGE.to_string())
            }
        }
    } else {
        None
    };

    Ok(GenerateOutcome { vietnamese, english })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, PromptMode};
    use crate::testing::MockTranslator;

    fn options(request: PromptRequest, translate: bool) -> GenerateOptions {
        GenerateOptions { request, translate }
    }

    #[test]
    fn empty_request_is_rejected_before_assembly_and_translation() {
        let translator = MockTranslator::new();
        let ctx = AppContext::new(translator);

        let result = execute(&ctx, &options(PromptRequest::default(), true));
        assert!(matches!(result, Err(AppError::MissingInput)));
        assert_eq!(ctx.translator().call_count(), 0);
    }

    #[test]
    fn successful_translation_fills_the_english_variant() {
        let translator = MockTranslator::with_response("Instrumental, Rock");
        let ctx = AppContext::new(translator);

        let mut request = PromptRequest { instrumental: true, ..Default::default() };
        request.selections.set(Category::Genre, "Rock");

        let outcome = execute(&ctx, &options(request, true)).unwrap();
        assert_eq!(outcome.vietnamese, "Không lời, Rock");
        assert_eq!(outcome.english.as_deref(), Some("Instrumental, Rock"));
        assert_eq!(ctx.translator().call_count(), 1);
    }

    #[test]
    fn translation_failure_yields_fixed_message_and_keeps_vietnamese() {
        let translator = MockTranslator::new();
        translator.set_should_fail(true);
        let ctx = AppContext::new(translator);

        let mut request = PromptRequest::default();
        request.selections.set(Category::Genre, "Rock");
        request.mode = PromptMode::Detailed;

        let outcome = execute(&ctx, &options(request, true)).unwrap();
        assert_eq!(outcome.vietnamese, "Một bài hát rock.");
        assert_eq!(outcome.english.as_deref(), Some(TRANSLATION_FAILURE_MESSAGE));
    }

    #[test]
    fn translation_disabled_skips_the_collaborator() {
        let translator = MockTranslator::new();
        let ctx = AppContext::new(translator);

        let request =
            PromptRequest { description: "a song about rain".into(), ..Default::default() };

        let outcome = execute(&ctx, &options(request, false)).unwrap();
        assert_eq!(outcome.vietnamese, "a song about rain");
        assert_eq!(outcome.english, None);
        assert_eq!(ctx.translator().call_count(), 0);
    }

    #[test]
    fn translator_receives_the_assembled_vietnamese_prompt() {
        let translator = MockTranslator::new();
        let ctx = AppContext::new(translator);

        let mut request = PromptRequest::default();
        request.selections.set(Category::Genre, "Pop");
        request.selections.set(Category::Mood, "Vui tươi");

        execute(&ctx, &options(request, true)).unwrap();
        assert_eq!(ctx.translator().calls(), vec!["Pop, Vui tươi".to_string()]);
    }
}
