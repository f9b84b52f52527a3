use askama::Template;

use super::Chrome;
use crate::models::Locale;
use crate::sections::icons::{Glyph, IconView};
use crate::sections::payload::NoPayload;
use crate::sections::registry::{ResolvedSection, SectionRenderer};

/// Where the signup form posts. The handler behind it owns delivery.
pub const NEWSLETTER_ACTION: &str = "/newsletter/subscribe";

#[derive(Template)]
#[template(path = "sections/newsletter.html")]
struct NewsletterTemplate {
    chrome: Chrome,
    title: Option<String>,
    subtitle: Option<String>,
    action: &'static str,
    locale: &'static str,
    section_id: String,
    placeholder: &'static str,
    button_label: String,
    icon: IconView,
}

pub struct NewsletterRenderer;

impl SectionRenderer for NewsletterRenderer {
    type Payload = NoPayload;

    fn render(&self, section: &ResolvedSection<'_>, _: NoPayload) -> Result<Option<String>, askama::Error> {
        let locale = section.locale();
        let (placeholder, default_label) = match locale {
            Locale::He => ("כתובת אימייל", "הרשמה"),
            Locale::En => ("Enter your email", "Subscribe"),
        };

        NewsletterTemplate {
            chrome: Chrome::new(section, "newsletter"),
            title: section.title(),
            subtitle: section.subtitle(),
            action: NEWSLETTER_ACTION,
            locale: locale.as_str(),
            section_id: section.id().to_string(),
            placeholder,
            button_label: section
                .button_text()
                .unwrap_or_else(|| default_label.to_string()),
            icon: Glyph::Mail.into(),
        }
        .render()
        .map(Some)
    }
}
