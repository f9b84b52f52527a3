use askama::Template;

use super::Chrome;
use crate::models::Locale;
use crate::sections::icons::{Glyph, IconSet, IconView, FEATURE_ICONS, HIGHLIGHT_ICONS};
use crate::sections::payload::{GridCard, GridCardsPayload, IconItem, IconItemsPayload};
use crate::sections::registry::{ResolvedSection, SectionRenderer};

struct IconCard {
    icon: IconView,
    title: Option<String>,
    description: Option<String>,
}

fn icon_cards(items: Vec<IconItem>, icons: &IconSet) -> Vec<IconCard> {
    items
        .into_iter()
        .map(|item| IconCard {
            icon: icons.resolve(item.icon.as_deref()).into(),
            title: item.title,
            description: item.description,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "sections/highlight_grid.html")]
struct HighlightGridTemplate {
    chrome: Chrome,
    title: Option<String>,
    items: Vec<IconCard>,
}

pub struct HighlightGridRenderer;

impl SectionRenderer for HighlightGridRenderer {
    type Payload = IconItemsPayload;

    fn render(&self, section: &ResolvedSection<'_>, payload: IconItemsPayload) -> Result<Option<String>, askama::Error> {
        HighlightGridTemplate {
            chrome: Chrome::new(section, "highlight-grid"),
            title: section.title(),
            items: icon_cards(payload.items, &HIGHLIGHT_ICONS),
        }
        .render()
        .map(Some)
    }
}

#[derive(Template)]
#[template(path = "sections/features.html")]
struct FeaturesTemplate {
    chrome: Chrome,
    title: Option<String>,
    subtitle: Option<String>,
    items: Vec<IconCard>,
}

pub struct FeaturesRenderer;

impl SectionRenderer for FeaturesRenderer {
    type Payload = IconItemsPayload;

    fn render(&self, section: &ResolvedSection<'_>, payload: IconItemsPayload) -> Result<Option<String>, askama::Error> {
        FeaturesTemplate {
            chrome: Chrome::new(section, "features"),
            title: section.title(),
            subtitle: section.subtitle(),
            items: icon_cards(payload.items, &FEATURE_ICONS),
        }
        .render()
        .map(Some)
    }
}

#[derive(Template)]
#[template(path = "sections/content_grid.html")]
struct ContentGridTemplate {
    chrome: Chrome,
    title: Option<String>,
    items: Vec<GridCard>,
    read_more: &'static str,
    arrow: IconView,
}

pub struct ContentGridRenderer;

impl SectionRenderer for ContentGridRenderer {
    type Payload = GridCardsPayload;

    fn render(&self, section: &ResolvedSection<'_>, payload: GridCardsPayload) -> Result<Option<String>, askama::Error> {
        let read_more = match section.locale() {
            Locale::He => "קרא עוד",
            Locale::En => "Read more",
        };

        ContentGridTemplate {
            chrome: Chrome::new(section, "content-grid"),
            title: section.title(),
            items: payload.items,
            read_more,
            arrow: Glyph::forward(section.is_rtl()).into(),
        }
        .render()
        .map(Some)
    }
}
