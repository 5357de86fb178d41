use crate::domain::{AppError, Category, vocabulary};

/// Print the creative vocabulary, whole or for one category.
pub fn run_categories(category: Option<&str>, explain: bool) -> Result<(), AppError> {
    match category {
        Some(name) => print_category(name.parse()?, explain),
        None => {
            for category in Category::ALL {
                print_category(category, explain);
            }
        }
    }
    Ok(())
}

fn print_category(category: Category, explain: bool) {
    println!("{} ({})", category.label(), category.flag_name());
    for entry in vocabulary::options(category) {
        if explain {
            println!("  {}: {}", entry.name, entry.explanation);
        } else {
            println!("  {}", entry.name);
        }
    }
    println!();
}
