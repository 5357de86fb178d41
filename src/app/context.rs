use crate::ports::Translator;

/// Application context holding dependencies for command execution.
pub struct AppContext<T: Translator> {
    translator: T,
}

impl<T: Translator> AppContext<T> {
    /// Create a new application context.
    pub fn new(translator: T) -> Self {
        Self { translator }
    }

    /// Get a reference to the translation collaborator.
    pub fn translator(&self) -> &T {
        &self.translator
    }
}
