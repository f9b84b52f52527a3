/// Glyphs available to section renderers. Names follow the icon font the
/// stylesheet ships (`icon-<name>`); the symbol is the text fallback.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Glyph {
    Star,
    Check,
    Sparkles,
    Zap,
    Shield,
    Heart,
    TrendingUp,
    Users,
    Award,
    MapPin,
    ArrowLeft,
    ArrowRight,
    ChevronLeft,
    ChevronRight,
    Quote,
    Mail,
}

impl Glyph {
    /// Kebab-case name used in CSS classes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Check => "check",
            Self::Sparkles => "sparkles",
            Self::Zap => "zap",
            Self::Shield => "shield",
            Self::Heart => "heart",
            Self::TrendingUp => "trending-up",
            Self::Users => "users",
            Self::Award => "award",
            Self::MapPin => "map-pin",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Quote => "quote",
            Self::Mail => "mail",
        }
    }

    /// PascalCase component name, as authors sometimes write it (`"MapPin"`).
    pub fn component_name(&self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Check => "Check",
            Self::Sparkles => "Sparkles",
            Self::Zap => "Zap",
            Self::Shield => "Shield",
            Self::Heart => "Heart",
            Self::TrendingUp => "TrendingUp",
            Self::Users => "Users",
            Self::Award => "Award",
            Self::MapPin => "MapPin",
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::ChevronLeft => "ChevronLeft",
            Self::ChevronRight => "ChevronRight",
            Self::Quote => "Quote",
            Self::Mail => "Mail",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Star => "★",
            Self::Check => "✓",
            Self::Sparkles => "✨",
            Self::Zap => "⚡",
            Self::Shield => "🛡",
            Self::Heart => "♥",
            Self::TrendingUp => "📈",
            Self::Users => "👥",
            Self::Award => "🏆",
            Self::MapPin => "📍",
            Self::ArrowLeft => "←",
            Self::ArrowRight => "→",
            Self::ChevronLeft => "‹",
            Self::ChevronRight => "›",
            Self::Quote => "❝",
            Self::Mail => "✉",
        }
    }

    /// "Forward" arrow for the reading direction.
    pub fn forward(rtl: bool) -> Self {
        if rtl {
            Self::ArrowLeft
        } else {
            Self::ArrowRight
        }
    }

    pub fn backward(rtl: bool) -> Self {
        if rtl {
            Self::ArrowRight
        } else {
            Self::ArrowLeft
        }
    }
}

/// A renderer's icon table. Keys that resolve to nothing fall back to the
/// table's own default glyph.
#[derive(Debug)]
pub struct IconSet {
    entries: &'static [(&'static str, Glyph)],
    fallback: Glyph,
}

impl IconSet {
    pub const fn new(entries: &'static [(&'static str, Glyph)], fallback: Glyph) -> Self {
        Self { entries, fallback }
    }

    pub fn fallback(&self) -> Glyph {
        self.fallback
    }

    pub fn resolve(&self, key: Option<&str>) -> Glyph {
        let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) else {
            return self.fallback;
        };

        self.entries
            .iter()
            .find(|(short, glyph)| {
                short.eq_ignore_ascii_case(key) || glyph.component_name().eq_ignore_ascii_case(key)
            })
            .map(|(_, glyph)| *glyph)
            .unwrap_or(self.fallback)
    }
}

pub static HIGHLIGHT_ICONS: IconSet = IconSet::new(
    &[
        ("star", Glyph::Star),
        ("check", Glyph::Check),
        ("sparkles", Glyph::Sparkles),
        ("zap", Glyph::Zap),
        ("shield", Glyph::Shield),
        ("heart", Glyph::Heart),
        ("trending", Glyph::TrendingUp),
        ("users", Glyph::Users),
        ("award", Glyph::Award),
        ("map", Glyph::MapPin),
    ],
    Glyph::Star,
);

pub static FEATURE_ICONS: IconSet = IconSet::new(
    &[
        ("star", Glyph::Star),
        ("check", Glyph::Check),
        ("sparkles", Glyph::Sparkles),
        ("zap", Glyph::Zap),
        ("shield", Glyph::Shield),
        ("heart", Glyph::Heart),
        ("trending", Glyph::TrendingUp),
        ("users", Glyph::Users),
        ("award", Glyph::Award),
    ],
    Glyph::Check,
);

/// Template-ready icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconView {
    pub name: &'static str,
    pub symbol: &'static str,
}

impl From<Glyph> for IconView {
    fn from(glyph: Glyph) -> Self {
        Self {
            name: glyph.name(),
            symbol: glyph.symbol(),
        }
    }
}
