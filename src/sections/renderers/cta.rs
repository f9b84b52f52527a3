use askama::Template;

use super::{ButtonView, Chrome};
use crate::sections::icons::{Glyph, IconView};
use crate::sections::payload::NoPayload;
use crate::sections::registry::{ResolvedSection, SectionRenderer};

#[derive(Template)]
#[template(path = "sections/cta.html")]
struct CtaTemplate {
    chrome: Chrome,
    title: Option<String>,
    subtitle: Option<String>,
    button: Option<ButtonView>,
    arrow: IconView,
    background_image: Option<String>,
    background_color: Option<String>,
}

pub struct CtaRenderer;

impl SectionRenderer for CtaRenderer {
    type Payload = NoPayload;

    fn render(&self, section: &ResolvedSection<'_>, _: NoPayload) -> Result<Option<String>, askama::Error> {
        CtaTemplate {
            chrome: Chrome::new(section, "cta"),
            title: section.title(),
            subtitle: section.subtitle(),
            button: ButtonView::from_section(section),
            arrow: Glyph::forward(section.is_rtl()).into(),
            background_image: section.background_image(),
            background_color: section.background_color(),
        }
        .render()
        .map(Some)
    }
}
