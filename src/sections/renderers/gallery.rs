use askama::Template;

use super::Chrome;
use crate::sections::carousel::Carousel;
use crate::sections::icons::{Glyph, IconView};
use crate::sections::payload::NoPayload;
use crate::sections::registry::{ResolvedSection, SectionRenderer};

/// Thumbnails appear once a gallery has more than this many images.
const THUMBNAIL_THRESHOLD: usize = 4;
const MAX_THUMBNAILS: usize = 6;

#[derive(Clone)]
struct Selector {
    index: usize,
    href: String,
    src: String,
    active: bool,
}

#[derive(Template)]
#[template(path = "sections/gallery.html")]
struct GalleryTemplate {
    chrome: Chrome,
    title: Option<String>,
    current: String,
    current_index: usize,
    total: usize,
    prev_href: String,
    next_href: String,
    prev_icon: IconView,
    next_icon: IconView,
    dots: Vec<Selector>,
    thumbnails: Vec<Selector>,
}

/// Image carousel over `images`. Renders nothing without images.
pub struct GalleryRenderer;

impl SectionRenderer for GalleryRenderer {
    type Payload = NoPayload;

    fn render(&self, section: &ResolvedSection<'_>, _: NoPayload) -> Result<Option<String>, askama::Error> {
        let images = section.images();
        if images.is_empty() {
            return Ok(None);
        }

        let id = section.id();
        let anchor = section.anchor();
        let state = &section.ctx.state;
        let carousel = Carousel::starting_at(images.len(), state.cursor(id));
        let link = |index: usize| state.with_cursor(id, index).href(&anchor);

        let selectors: Vec<Selector> = images
            .iter()
            .enumerate()
            .map(|(index, src)| Selector {
                index,
                href: link(index),
                src: src.clone(),
                active: index == carousel.index(),
            })
            .collect();

        let (dots, thumbnails) = if images.len() > 1 {
            let thumbnails = if images.len() > THUMBNAIL_THRESHOLD {
                selectors.iter().take(MAX_THUMBNAILS).cloned().collect()
            } else {
                Vec::new()
            };
            (selectors, thumbnails)
        } else {
            (Vec::new(), Vec::new())
        };

        GalleryTemplate {
            chrome: Chrome::new(section, "gallery"),
            title: section.title(),
            current: images[carousel.index()].clone(),
            current_index: carousel.index(),
            total: carousel.len(),
            prev_href: link(carousel.peek_prev()),
            next_href: link(carousel.peek_next()),
            prev_icon: Glyph::ChevronLeft.into(),
            next_icon: Glyph::ChevronRight.into(),
            dots,
            thumbnails,
        }
        .render()
        .map(Some)
    }
}
