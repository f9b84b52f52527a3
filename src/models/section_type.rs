use serde::{Deserialize, Serialize};

/// The section tags the built-in renderers understand.
///
/// Stored sections carry their tag as free text so new types can be added to
/// the registry without a schema change; this enum only names the built-ins.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Hero,
    IntroText,
    HighlightGrid,
    ContentGrid,
    Cta,
    Faq,
    Stats,
    Features,
    Gallery,
    Newsletter,
    Testimonial,
}

impl SectionType {
    pub const ALL: [SectionType; 11] = [
        Self::Hero,
        Self::IntroText,
        Self::HighlightGrid,
        Self::ContentGrid,
        Self::Cta,
        Self::Faq,
        Self::Stats,
        Self::Features,
        Self::Gallery,
        Self::Newsletter,
        Self::Testimonial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::IntroText => "intro_text",
            Self::HighlightGrid => "highlight_grid",
            Self::ContentGrid => "content_grid",
            Self::Cta => "cta",
            Self::Faq => "faq",
            Self::Stats => "stats",
            Self::Features => "features",
            Self::Gallery => "gallery",
            Self::Newsletter => "newsletter",
            Self::Testimonial => "testimonial",
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for SectionType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for SectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("invalid section type: {}", s))
    }
}
