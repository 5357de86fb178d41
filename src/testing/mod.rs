mod mock_clipboard;
mod mock_translator;

pub use mock_clipboard::MockClipboard;
pub use mock_translator::MockTranslator;
