mod clipboard_arboard;
mod gemini_translator;
mod prompt_file;

pub use clipboard_arboard::ArboardClipboard;
pub use gemini_translator::{HttpGeminiTranslator, render_translation_prompt};
pub use prompt_file::save_prompt;
