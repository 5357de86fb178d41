//! Interactive prompt form: one select per category, then description,
//! instrumental toggle and prompt mode. Esc or Ctrl-C cancels the whole form.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::{AppError, Category, PromptMode, PromptRequest, vocabulary};

/// Run the form, starting from `initial`. Returns `None` when the user
/// cancels.
pub fn run_form(initial: PromptRequest) -> Result<Option<PromptRequest>, AppError> {
    let mut request = initial;

    println!("🎨 Bảng sáng tạo");
    for category in Category::ALL {
        let entries = vocabulary::options(category);
        let mut items: Vec<&str> = Vec::with_capacity(entries.len() + 1);
        items.push(vocabulary::RANDOM_LABEL);
        items.extend(entries.iter().map(|entry| entry.name));

        let current = request
            .selections
            .get(category)
            .and_then(|value| entries.iter().position(|entry| entry.name == value))
            .map(|position| position + 1)
            .unwrap_or(0);

        let Some(index) = prompt_select(category.label(), &items, current)? else {
            return Ok(None);
        };
        if index == 0 {
            request.selections.clear(category);
        } else {
            let entry = &entries[index - 1];
            request.selections.set(category, entry.name);
            println!("   {}", entry.explanation);
        }
    }

    let Some(description) = prompt_description(&request.description)? else {
        return Ok(None);
    };
    request.description = description;

    let Some(instrumental) = prompt_instrumental(request.instrumental)? else {
        return Ok(None);
    };
    request.instrumental = instrumental;

    let mode_default = match request.mode {
        PromptMode::Simple => 0,
        PromptMode::Detailed => 1,
    };
    let Some(mode_index) =
        prompt_select("Cấu trúc prompt", &["Đơn giản (tag list)", "Chi tiết (câu văn)"], mode_default)?
    else {
        return Ok(None);
    };
    request.mode = if mode_index == 0 { PromptMode::Simple } else { PromptMode::Detailed };

    Ok(Some(request))
}

fn prompt_select(label: &str, items: &[&str], default: usize) -> Result<Option<usize>, AppError> {
    match Select::new().with_prompt(label).items(items).default(default).interact() {
        Ok(index) => Ok(Some(index)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::FormInput(format!("Failed to read selection: {}", err))),
    }
}

fn prompt_description(initial: &str) -> Result<Option<String>, AppError> {
    let input = Input::<String>::new()
        .with_prompt("Mô tả bài hát (tùy chọn)")
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text();
    match input {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::FormInput(format!("Failed to read description: {}", err))),
    }
}

fn prompt_instrumental(default: bool) -> Result<Option<bool>, AppError> {
    match Confirm::new().with_prompt("Không lời (instrumental)?").default(default).interact() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::FormInput(format!("Failed to read toggle: {}", err))),
    }
}
