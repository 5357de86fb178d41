use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::Translator;

/// Mock translator for testing.
#[derive(Default)]
pub struct MockTranslator {
    pub response: RefCell<Option<String>>,
    pub should_fail: RefCell<bool>,
    pub calls: RefCell<Vec<String>>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(text: impl Into<String>) -> Self {
        let translator = Self::default();
        *translator.response.borrow_mut() = Some(text.into());
        translator
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.borrow_mut() = fail;
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Translator for MockTranslator {
    fn translate(&self, vietnamese: &str) -> Result<String, AppError> {
        self.calls.borrow_mut().push(vietnamese.to_string());
        if *self.should_fail.borrow() {
            return Err(AppError::TranslationError {
                message: "Mock translator error".to_string(),
                status: Some(503),
            });
        }
        Ok(self
            .response
            .borrow()
            .clone()
            .unwrap_or_else(|| format!("translated: {vietnamese}")))
    }
}
