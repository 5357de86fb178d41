use std::fmt;
use std::str::FromStr;

use super::AppError;

/// The two prompt variants a generation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptLanguage {
    Vietnamese,
    English,
}

impl PromptLanguage {
    /// Short code used in file names and the `--copy` flag.
    pub fn code(self) -> &'static str {
        match self {
            PromptLanguage::Vietnamese => "vi",
            PromptLanguage::English => "en",
        }
    }
}

impl fmt::Display for PromptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PromptLanguage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" => Ok(PromptLanguage::Vietnamese),
            "en" => Ok(PromptLanguage::English),
            _ => Err(AppError::InvalidLanguage(s.to_string())),
        }
    }
}
