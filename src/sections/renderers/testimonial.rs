use askama::Template;

use super::Chrome;
use crate::sections::carousel::Carousel;
use crate::sections::icons::{Glyph, IconView};
use crate::sections::payload::{TestimonialItem, TestimonialsPayload};
use crate::sections::registry::{ResolvedSection, SectionRenderer};

const MAX_STARS: u8 = 5;

struct Star {
    filled: bool,
}

struct Dot {
    index: usize,
    href: String,
    active: bool,
}

#[derive(Template)]
#[template(path = "sections/testimonial.html")]
struct TestimonialTemplate {
    chrome: Chrome,
    title: Option<String>,
    item: TestimonialItem,
    stars: Vec<Star>,
    current_index: usize,
    total: usize,
    prev_href: String,
    next_href: String,
    prev_icon: IconView,
    next_icon: IconView,
    quote_icon: IconView,
    dots: Vec<Dot>,
}

/// One quote at a time, with wrap-around navigation. Renders nothing
/// without items.
pub struct TestimonialRenderer;

impl SectionRenderer for TestimonialRenderer {
    type Payload = TestimonialsPayload;

    fn render(
        &self,
        section: &ResolvedSection<'_>,
        payload: TestimonialsPayload,
    ) -> Result<Option<String>, askama::Error> {
        let mut items = payload.items;
        if items.is_empty() {
            return Ok(None);
        }

        let id = section.id();
        let anchor = section.anchor();
        let state = &section.ctx.state;
        let rtl = section.is_rtl();
        let carousel = Carousel::starting_at(items.len(), state.cursor(id));
        let link = |index: usize| state.with_cursor(id, index).href(&anchor);

        let dots = if items.len() > 1 {
            (0..items.len())
                .map(|index| Dot {
                    index,
                    href: link(index),
                    active: index == carousel.index(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let item = items.swap_remove(carousel.index());
        let stars = match item.rating {
            Some(rating) if rating > 0 => (0..MAX_STARS).map(|i| Star { filled: i < rating }).collect(),
            _ => Vec::new(),
        };

        TestimonialTemplate {
            chrome: Chrome::new(section, "testimonial"),
            title: section.title(),
            item,
            stars,
            current_index: carousel.index(),
            total: carousel.len(),
            prev_href: link(carousel.peek_prev()),
            next_href: link(carousel.peek_next()),
            prev_icon: Glyph::backward(rtl).into(),
            next_icon: Glyph::forward(rtl).into(),
            quote_icon: Glyph::Quote.into(),
            dots,
        }
        .render()
        .map(Some)
    }
}
