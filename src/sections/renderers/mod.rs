//! Built-in section renderers, one askama template each.

mod cta;
mod faq;
mod gallery;
mod grids;
mod hero;
mod intro_text;
mod newsletter;
mod stats;
mod testimonial;

pub use cta::CtaRenderer;
pub use faq::FaqRenderer;
pub use gallery::GalleryRenderer;
pub use grids::{ContentGridRenderer, FeaturesRenderer, HighlightGridRenderer};
pub use hero::HeroRenderer;
pub use intro_text::IntroTextRenderer;
pub use newsletter::{NewsletterRenderer, NEWSLETTER_ACTION};
pub use stats::StatsRenderer;
pub use testimonial::TestimonialRenderer;

use crate::models::SectionType;
use crate::sections::registry::{ResolvedSection, SectionRegistry};

pub(crate) fn register_builtins(registry: &mut SectionRegistry) {
    registry
        .register(SectionType::Hero.as_str(), HeroRenderer)
        .register(SectionType::IntroText.as_str(), IntroTextRenderer)
        .register(SectionType::HighlightGrid.as_str(), HighlightGridRenderer)
        .register(SectionType::ContentGrid.as_str(), ContentGridRenderer)
        .register(SectionType::Cta.as_str(), CtaRenderer)
        .register(SectionType::Faq.as_str(), FaqRenderer)
        .register(SectionType::Stats.as_str(), StatsRenderer)
        .register(SectionType::Features.as_str(), FeaturesRenderer)
        .register(SectionType::Gallery.as_str(), GalleryRenderer)
        .register(SectionType::Newsletter.as_str(), NewsletterRenderer)
        .register(SectionType::Testimonial.as_str(), TestimonialRenderer);
}

/// Attributes every section wrapper carries.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub anchor: String,
    pub test_id: String,
    pub class: String,
    pub rtl: bool,
}

impl Chrome {
    pub(crate) fn new(section: &ResolvedSection<'_>, test_prefix: &str) -> Self {
        Self {
            anchor: section.anchor(),
            test_id: format!("section-{}-{}", test_prefix, section.id()),
            class: section.class(),
            rtl: section.is_rtl(),
        }
    }
}

/// Call-to-action link; rendered only when both label and target exist.
#[derive(Debug, Clone)]
pub struct ButtonView {
    pub label: String,
    pub href: String,
}

impl ButtonView {
    pub(crate) fn from_section(section: &ResolvedSection<'_>) -> Option<Self> {
        section
            .button_text()
            .zip(section.button_link())
            .map(|(label, href)| Self { label, href })
    }
}
