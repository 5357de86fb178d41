mod clipboard_writer;
mod translator;

pub use clipboard_writer::ClipboardWriter;
pub use translator::{NoopTranslator, Translator};
