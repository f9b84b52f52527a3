use askama::Template;

use super::{ButtonView, Chrome};
use crate::sections::icons::{Glyph, IconView};
use crate::sections::payload::NoPayload;
use crate::sections::registry::{ResolvedSection, SectionRenderer};

#[derive(Template)]
#[template(path = "sections/hero.html")]
struct HeroTemplate {
    chrome: Chrome,
    title: Option<String>,
    subtitle: Option<String>,
    button: Option<ButtonView>,
    arrow: IconView,
    background_image: Option<String>,
}

/// Full-bleed banner. Uses the background image when set, a gradient
/// otherwise; the call to action needs both a label and a link.
pub struct HeroRenderer;

impl SectionRenderer for HeroRenderer {
    type Payload = NoPayload;

    fn render(&self, section: &ResolvedSection<'_>, _: NoPayload) -> Result<Option<String>, askama::Error> {
        HeroTemplate {
            chrome: Chrome::new(section, "hero"),
            title: section.title(),
            subtitle: section.subtitle(),
            button: ButtonView::from_section(section),
            arrow: Glyph::forward(section.is_rtl()).into(),
            background_image: section.background_image(),
        }
        .render()
        .map(Some)
    }
}
