use std::fmt;
use std::str::FromStr;

use super::AppError;

/// The fixed set of creative categories a prompt is assembled from.
///
/// The variant order is the order the form and the `categories` listing
/// present them in; it is unrelated to tag priority during assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Theme,
    Melody,
    Harmony,
    Rhythm,
    Structure,
    Instrumentation,
    Genre,
    Mood,
    Dynamics,
    Production,
    Creativity,
    VocalStyle,
}

impl Category {
    /// All categories, in presentation order.
    pub const ALL: [Category; 12] = [
        Category::Theme,
        Category::Melody,
        Category::Harmony,
        Category::Rhythm,
        Category::Structure,
        Category::Instrumentation,
        Category::Genre,
        Category::Mood,
        Category::Dynamics,
        Category::Production,
        Category::Creativity,
        Category::VocalStyle,
    ];

    /// Vietnamese display label, as shown on the form.
    pub fn label(self) -> &'static str {
        match self {
            Category::Theme => "Chủ đề",
            Category::Melody => "Giai điệu",
            Category::Harmony => "Hòa âm",
            Category::Rhythm => "Nhịp điệu",
            Category::Structure => "Cấu trúc",
            Category::Instrumentation => "Nhạc cụ",
            Category::Genre => "Thể loại",
            Category::Mood => "Tâm trạng",
            Category::Dynamics => "Động lực học",
            Category::Production => "Sản xuất",
            Category::Creativity => "Sáng tạo",
            Category::VocalStyle => "Giọng hát",
        }
    }

    /// CLI flag spelling for this category.
    pub fn flag_name(self) -> &'static str {
        match self {
            Category::Theme => "theme",
            Category::Melody => "melody",
            Category::Harmony => "harmony",
            Category::Rhythm => "rhythm",
            Category::Structure => "structure",
            Category::Instrumentation => "instrumentation",
            Category::Genre => "genre",
            Category::Mood => "mood",
            Category::Dynamics => "dynamics",
            Category::Production => "production",
            Category::Creativity => "creativity",
            Category::VocalStyle => "vocal-style",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag_name())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.flag_name() == normalized)
            .ok_or_else(|| AppError::InvalidCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_parses_from_its_flag_name() {
        for category in Category::ALL {
            assert_eq!(category.flag_name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Vocal-Style".parse::<Category>().unwrap(), Category::VocalStyle);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "tempo".parse::<Category>().unwrap_err();
        assert!(matches!(err, AppError::InvalidCategory(name) if name == "tempo"));
    }
}
