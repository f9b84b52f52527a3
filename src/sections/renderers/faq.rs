use askama::Template;

use super::Chrome;
use crate::sections::carousel::{Accordion, AccordionMode};
use crate::sections::payload::FaqPayload;
use crate::sections::registry::{ResolvedSection, SectionRenderer};

struct FaqEntry {
    key: String,
    question: Option<String>,
    answer: Option<String>,
    open: bool,
    permalink: String,
}

#[derive(Template)]
#[template(path = "sections/faq.html")]
struct FaqTemplate {
    chrome: Chrome,
    title: Option<String>,
    group: String,
    exclusive: bool,
    items: Vec<FaqEntry>,
}

/// Question/answer accordion. Entry keys are `faq-<index>`, so they stay
/// stable across renders of the same payload.
pub struct FaqRenderer;

impl SectionRenderer for FaqRenderer {
    type Payload = FaqPayload;

    fn render(&self, section: &ResolvedSection<'_>, payload: FaqPayload) -> Result<Option<String>, askama::Error> {
        let id = section.id();
        let anchor = section.anchor();
        let state = &section.ctx.state;

        let mut accordion = Accordion::new(payload.items.len(), AccordionMode::Single);
        if let Some(open) = state.open_entry(id) {
            accordion.toggle(open);
        }

        let items = payload
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| FaqEntry {
                key: format!("faq-{index}"),
                question: item.question,
                answer: item.answer,
                open: accordion.is_open(index),
                permalink: state.with_open_entry(id, Some(index)).href(&anchor),
            })
            .collect();

        FaqTemplate {
            chrome: Chrome::new(section, "faq"),
            title: section.title(),
            group: format!("faq-{id}"),
            exclusive: accordion.mode() == AccordionMode::Single,
            items,
        }
        .render()
        .map(Some)
    }
}
