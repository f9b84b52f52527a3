use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Site locales. English is the primary locale every section is authored in;
/// Hebrew is the secondary locale carried in the `*_he` columns.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    He,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::He];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::He => "he",
        }
    }

    pub fn is_secondary(&self) -> bool {
        matches!(self, Self::He)
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::He => Direction::Rtl,
        }
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Rtl)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "he" => Ok(Self::He),
            _ => Err(format!("invalid locale: {}", s)),
        }
    }
}

/// Locale and reading direction for one render pass.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LocaleContext {
    pub locale: Locale,
    pub direction: Direction,
}

impl LocaleContext {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            direction: locale.direction(),
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Picks the secondary-locale value when the active locale is the secondary
/// one and a non-empty secondary value exists; otherwise the primary value is
/// returned unchanged.
pub fn resolve<'a>(
    locale: Locale,
    primary: Option<&'a str>,
    secondary: Option<&'a str>,
) -> Option<&'a str> {
    match secondary {
        Some(value) if locale.is_secondary() && !value.is_empty() => Some(value),
        _ => primary,
    }
}

/// Same precedence as [`resolve`] for the structured `data` payloads. A JSON
/// `null` secondary payload counts as absent.
pub fn resolve_value<'a>(
    locale: Locale,
    primary: Option<&'a Value>,
    secondary: Option<&'a Value>,
) -> Option<&'a Value> {
    match secondary {
        Some(value) if locale.is_secondary() && !value.is_null() => Some(value),
        _ => primary,
    }
}
