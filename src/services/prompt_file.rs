use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, PromptLanguage};

/// Write a prompt as a plain-text file named `suno_prompt_{vi|en}.txt` inside
/// `dir`, returning the path written. Overwrites an existing file.
pub fn save_prompt(dir: &Path, text: &str, language: PromptLanguage) -> Result<PathBuf, AppError> {
    let path = dir.join(format!("suno_prompt_{}.txt", language.code()));
    fs::write(&path, text)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_with_the_fixed_name_per_language() {
        let dir = tempfile::tempdir().unwrap();
        let vi = save_prompt(dir.path(), "Không lời, Rock", PromptLanguage::Vietnamese).unwrap();
        let en = save_prompt(dir.path(), "Instrumental, Rock", PromptLanguage::English).unwrap();

        assert_eq!(vi.file_name().unwrap(), "suno_prompt_vi.txt");
        assert_eq!(en.file_name().unwrap(), "suno_prompt_en.txt");
        assert_eq!(fs::read_to_string(&vi).unwrap(), "Không lời, Rock");
        assert_eq!(fs::read_to_string(&en).unwrap(), "Instrumental, Rock");
    }

    #[test]
    fn missing_directory_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = save_prompt(&missing, "x", PromptLanguage::Vietnamese).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
