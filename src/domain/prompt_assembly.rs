//! Pure prompt assembly.
//!
//! Turns a [`PromptRequest`] into the final Vietnamese prompt text, either as
//! a comma-joined tag list (Simple) or a sequence of conditionally built
//! sentences (Detailed). No I/O and no vocabulary lookups happen here.

use super::{Category, PromptMode, PromptRequest};

/// Marker tag prepended in Simple mode for instrumental tracks.
pub const INSTRUMENTAL_TAG: &str = "Không lời";

/// Assemble the prompt text for a request.
///
/// Assumes the request passed its presence check; an all-empty request yields
/// an empty string rather than an error.
pub fn assemble(request: &PromptRequest) -> String {
    match request.mode {
        PromptMode::Simple => assemble_simple(request),
        PromptMode::Detailed => assemble_detailed(request),
    }
}

/// Tag priority order: genre, mood, theme, vocal style (skipped when
/// instrumental), instrumentation, rhythm, production, then the secondary
/// categories. Duplicate values keep their first position only.
fn assemble_simple(request: &PromptRequest) -> String {
    let mut order = vec![Category::Genre, Category::Mood, Category::Theme];
    if !request.instrumental {
        order.push(Category::VocalStyle);
    }
    order.extend([
        Category::Instrumentation,
        Category::Rhythm,
        Category::Production,
        // Secondary list.
        Category::Melody,
        Category::Harmony,
        Category::Structure,
        Category::Dynamics,
        Category::Creativity,
    ]);

    let mut tags: Vec<&str> = Vec::new();
    for category in order {
        if let Some(value) = request.selections.get(category) {
            if !tags.contains(&value) {
                tags.push(value);
            }
        }
    }
    if request.instrumental {
        tags.insert(0, INSTRUMENTAL_TAG);
    }

    let tag_part = tags.join(", ");
    let description = request.description.trim();
    match (description.is_empty(), tag_part.is_empty()) {
        (true, true) => String::new(),
        (true, false) => tag_part,
        (false, true) => description.to_string(),
        (false, false) => format!("{description}\n\n{tag_part}"),
    }
}

fn assemble_detailed(request: &PromptRequest) -> String {
    let get = |category| request.selections.get(category);
    let description = request.description.trim();
    let mut sentences: Vec<String> = Vec::new();

    let theme = get(Category::Theme);
    if !description.is_empty() {
        sentences.push(if request.instrumental {
            format!("Một bản nhạc không lời về {description}.")
        } else {
            format!("Một bài hát về {description}.")
        });
        if let Some(theme) = theme {
            sentences.push(format!("Tác phẩm khám phá chủ đề {}.", theme.to_lowercase()));
        }
    } else if let Some(theme) = theme {
        sentences.push(format!("Một tác phẩm khám phá chủ đề {}.", theme.to_lowercase()));
    }

    let genre = get(Category::Genre);
    let mood = get(Category::Mood);
    if genre.is_some() || mood.is_some() {
        let kind = if request.instrumental { "bản nhạc" } else { "bài hát" };
        let genre_text = genre.map(|g| format!(" {}", g.to_lowercase())).unwrap_or_default();
        let mood_text = mood.map(|m| format!(" {}", m.to_lowercase())).unwrap_or_default();
        // The lead-in depends on whether an opening sentence exists. Kept
        // exactly as the original behaves.
        let core = if sentences.is_empty() {
            format!("Một {kind}{genre_text}{mood_text}.")
        } else {
            format!("Đó là một {kind}{genre_text}{mood_text}.")
        };
        sentences.push(core.trim().to_string());
    }

    let mut featured: Vec<String> = Vec::new();
    if let Some(instrumentation) = get(Category::Instrumentation) {
        featured.push(format!("nhạc cụ {}", instrumentation.to_lowercase()));
    }
    if !request.instrumental {
        if let Some(vocal) = get(Category::VocalStyle) {
            featured.push(format!("giọng hát {}", vocal.to_lowercase()));
        }
    }
    if !featured.is_empty() {
        sentences.push(format!("Nổi bật với {}.", featured.join(" và ")));
    }

    let mut characteristics: Vec<String> = Vec::new();
    if let Some(melody) = get(Category::Melody) {
        characteristics.push(format!("giai điệu {}", melody.to_lowercase()));
    }
    if let Some(harmony) = get(Category::Harmony) {
        characteristics.push(format!("hòa âm {}", harmony.to_lowercase()));
    }
    if let Some(rhythm) = get(Category::Rhythm) {
        characteristics.push(format!("nhịp điệu {}", rhythm.to_lowercase()));
    }
    if let Some(dynamics) = get(Category::Dynamics) {
        characteristics.push(format!("động lực học {}", dynamics.to_lowercase()));
    }
    if !characteristics.is_empty() {
        sentences.push(format!("Âm nhạc được đặc trưng bởi {}.", characteristics.join(", ")));
    }

    let mut production_style: Vec<String> = Vec::new();
    if let Some(production) = get(Category::Production) {
        production_style.push(production.to_lowercase());
    }
    if let Some(creativity) = get(Category::Creativity) {
        production_style.push(creativity.to_lowercase());
    }
    if !production_style.is_empty() {
        sentences.push(format!("Phong cách sản xuất là {}.", production_style.join(" và ")));
    }

    if let Some(structure) = get(Category::Structure) {
        sentences.push(format!("Bài hát theo cấu trúc {}.", structure.to_lowercase()));
    }

    collapse_whitespace(&sentences.join(" "))
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
