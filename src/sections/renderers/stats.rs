use askama::Template;

use super::Chrome;
use crate::sections::payload::{StatItem, StatsPayload};
use crate::sections::registry::{ResolvedSection, SectionRenderer};

#[derive(Template)]
#[template(path = "sections/stats.html")]
struct StatsTemplate {
    chrome: Chrome,
    title: Option<String>,
    items: Vec<StatItem>,
}

pub struct StatsRenderer;

impl SectionRenderer for StatsRenderer {
    type Payload = StatsPayload;

    fn render(&self, section: &ResolvedSection<'_>, payload: StatsPayload) -> Result<Option<String>, askama::Error> {
        StatsTemplate {
            chrome: Chrome::new(section, "stats"),
            title: section.title(),
            items: payload.items,
        }
        .render()
        .map(Some)
    }
}
