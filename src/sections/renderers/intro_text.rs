use askama::Template;

use super::Chrome;
use crate::sections::payload::NoPayload;
use crate::sections::registry::{ResolvedSection, SectionRenderer};

#[derive(Template)]
#[template(path = "sections/intro_text.html")]
struct IntroTextTemplate {
    chrome: Chrome,
    title: Option<String>,
    // Admin-authored HTML, inserted unescaped.
    description: Option<String>,
    image: Option<String>,
    background_color: Option<String>,
}

/// Heading and rich text, with the first image beside it when there is one.
pub struct IntroTextRenderer;

impl SectionRenderer for IntroTextRenderer {
    type Payload = NoPayload;

    fn render(&self, section: &ResolvedSection<'_>, _: NoPayload) -> Result<Option<String>, askama::Error> {
        IntroTextTemplate {
            chrome: Chrome::new(section, "intro"),
            title: section.title(),
            description: section.description(),
            image: section.images().into_iter().next(),
            background_color: section.background_color(),
        }
        .render()
        .map(Some)
    }
}
