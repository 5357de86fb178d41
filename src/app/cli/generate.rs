use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;

use super::form;
use crate::app::AppContext;
use crate::app::commands::{copy, generate};
use crate::domain::{AppError, Category, PromptLanguage, PromptRequest};
use crate::ports::NoopTranslator;
use crate::services::{ArboardClipboard, HttpGeminiTranslator, save_prompt};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Chủ đề (song theme)
    #[arg(long)]
    theme: Option<String>,
    /// Giai điệu (melody character)
    #[arg(long)]
    melody: Option<String>,
    /// Hòa âm (harmony)
    #[arg(long)]
    harmony: Option<String>,
    /// Nhịp điệu (rhythm)
    #[arg(long)]
    rhythm: Option<String>,
    /// Cấu trúc (song structure)
    #[arg(long)]
    structure: Option<String>,
    /// Nhạc cụ (instrumentation)
    #[arg(long)]
    instrumentation: Option<String>,
    /// Thể loại (genre)
    #[arg(long)]
    genre: Option<String>,
    /// Tâm trạng (mood)
    #[arg(long)]
    mood: Option<String>,
    /// Động lực học (dynamics)
    #[arg(long)]
    dynamics: Option<String>,
    /// Sản xuất (production style)
    #[arg(long)]
    production: Option<String>,
    /// Sáng tạo (creative twist)
    #[arg(long)]
    creativity: Option<String>,
    /// Giọng hát (vocal style)
    #[arg(long)]
    vocal_style: Option<String>,

    /// Free-text song description included in the prompt
    #[arg(short, long)]
    description: Option<String>,
    /// Instrumental track: skip vocal style and mark the prompt "Không lời"
    #[arg(short, long)]
    instrumental: bool,
    /// Prompt structure: simple (tag list) or detailed (sentences)
    #[arg(short, long, default_value = "simple")]
    mode: String,

    /// Skip the Gemini translation call
    #[arg(long)]
    no_translate: bool,
    /// Copy a prompt variant to the clipboard (vi or en)
    #[arg(long, value_name = "LANG")]
    copy: Option<String>,
    /// Write suno_prompt_{vi,en}.txt into the given directory
    #[arg(long, value_name = "DIR")]
    save: Option<PathBuf>,
    /// Run the interactive form even when flags are present
    #[arg(short = 'I', long)]
    interactive: bool,
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let mut request = request_from_args(&args)?;

    // With no input on a terminal, fall into the form instead of erroring.
    let wants_form = args.interactive
        || (request.selections.is_empty()
            && request.description.trim().is_empty()
            && std::io::stdin().is_terminal());
    if wants_form {
        match form::run_form(request)? {
            Some(updated) => request = updated,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    }

    request.validate()?;

    let translate = !args.no_translate;
    let outcome = if translate {
        let translator = HttpGeminiTranslator::from_env()?;
        let ctx = AppContext::new(translator);
        println!("⏳ Generating and translating prompt...");
        generate::execute(&ctx, &generate::GenerateOptions { request, translate })?
    } else {
        let ctx = AppContext::new(NoopTranslator);
        generate::execute(&ctx, &generate::GenerateOptions { request, translate })?
    };

    print_outcome(&outcome);

    if let Some(lang) = &args.copy {
        copy_outcome(&outcome, lang.parse()?);
    }
    if let Some(dir) = &args.save {
        save_outcome(&outcome, dir);
    }

    Ok(())
}

fn request_from_args(args: &GenerateArgs) -> Result<PromptRequest, AppError> {
    let mut request = PromptRequest {
        description: args.description.clone().unwrap_or_default(),
        instrumental: args.instrumental,
        mode: args.mode.parse()?,
        ..Default::default()
    };

    let flags = [
        (Category::Theme, &args.theme),
        (Category::Melody, &args.melody),
        (Category::Harmony, &args.harmony),
        (Category::Rhythm, &args.rhythm),
        (Category::Structure, &args.structure),
        (Category::Instrumentation, &args.instrumentation),
        (Category::Genre, &args.genre),
        (Category::Mood, &args.mood),
        (Category::Dynamics, &args.dynamics),
        (Category::Production, &args.production),
        (Category::Creativity, &args.creativity),
        (Category::VocalStyle, &args.vocal_style),
    ];
    for (category, value) in flags {
        if let Some(value) = value {
            request.selections.set(category, value.clone());
        }
    }

    Ok(request)
}

fn print_outcome(outcome: &generate::GenerateOutcome) {
    println!();
    println!("🌟 Tiếng Việt:");
    println!("{}", outcome.vietnamese);
    if let Some(english) = &outcome.english {
        println!();
        println!("🌟 Tiếng Anh:");
        println!("{}", english);
    }
}

fn copy_outcome(outcome: &generate::GenerateOutcome, language: PromptLanguage) {
    let text = match language {
        PromptLanguage::Vietnamese => outcome.vietnamese.as_str(),
        PromptLanguage::English => outcome.english.as_deref().unwrap_or_default(),
    };

    let copied = ArboardClipboard::new().and_then(|mut clipboard| copy::execute(&mut clipboard, text));
    match copied {
        Ok(true) => println!("✅ Copied the {} prompt to the clipboard", language),
        Ok(false) => println!("⚠️  Nothing to copy for '{}'", language),
        Err(err) => eprintln!("⚠️  Copy failed: {}", err),
    }
}

fn save_outcome(outcome: &generate::GenerateOutcome, dir: &std::path::Path) {
    let mut variants = vec![(PromptLanguage::Vietnamese, outcome.vietnamese.as_str())];
    if let Some(english) = &outcome.english {
        variants.push((PromptLanguage::English, english.as_str()));
    }

    for (language, text) in variants {
        match save_prompt(dir, text, language) {
            Ok(path) => println!("✅ Saved {}", path.display()),
            Err(err) => eprintln!("⚠️  Save failed for '{}': {}", language, err),
        }
    }
}
