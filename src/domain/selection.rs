use std::collections::BTreeMap;
use std::str::FromStr;

use super::{AppError, Category};

/// The user's category choices. An absent category means "unset/random";
/// there is no sentinel string stored anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    chosen: BTreeMap<Category, String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice for a category. A value that is empty after trimming
    /// clears the selection instead, so "set to empty" cannot diverge from
    /// "unset".
    pub fn set(&mut self, category: Category, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.chosen.remove(&category);
        } else {
            self.chosen.insert(category, value);
        }
    }

    /// Reset a category to unset/random.
    pub fn clear(&mut self, category: Category) {
        self.chosen.remove(&category);
    }

    /// The chosen value for a category, if one is set.
    pub fn get(&self, category: Category) -> Option<&str> {
        self.chosen.get(&category).map(String::as_str)
    }

    /// True when every category is unset.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}

/// Prompt assembly style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptMode {
    /// Comma-joined tag list.
    #[default]
    Simple,
    /// Conditionally constructed natural-language sentences.
    Detailed,
}

impl FromStr for PromptMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(PromptMode::Simple),
            "detailed" => Ok(PromptMode::Detailed),
            _ => Err(AppError::InvalidMode(s.to_string())),
        }
    }
}

/// Immutable snapshot of everything prompt assembly consumes.
#[derive(Debug, Clone, Default)]
pub struct PromptRequest {
    pub selections: SelectionSet,
    /// Optional free-text song description.
    pub description: String,
    /// When true, vocal style is ignored and a "no vocals" marker is injected.
    pub instrumental: bool,
    pub mode: PromptMode,
}

impl PromptRequest {
    /// Presence check: at least one category set or a non-blank description.
    ///
    /// Callers run this before assembly; an all-empty request never reaches
    /// the assembler or the translation service.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.selections.is_empty() && self.description.trim().is_empty() {
            return Err(AppError::MissingInput);
        }
        Ok(())
    }
}
