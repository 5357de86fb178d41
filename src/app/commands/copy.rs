use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Copy prompt text to a clipboard. Returns `false` when there is nothing to
/// copy, mirroring the no-op on an empty prompt.
pub fn execute<C: ClipboardWriter>(clipboard: &mut C, text: &str) -> Result<bool, AppError> {
    if text.is_empty() {
        return Ok(false);
    }
    clipboard.write_text(text)?;
    Ok(true)
}
