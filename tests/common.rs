#![allow(dead_code)]

use serde_json::{json, Value};
use uuid::Uuid;

use dunepress::models::*;
use dunepress::sections::{RenderContext, ViewState};

pub fn get_seed_page_id() -> Uuid {
    Uuid::parse_str("00000000-0000-0000-0000-0000000000aa").unwrap()
}

pub fn get_seed_section(section_type: &str) -> PageSection {
    PageSection::new(get_seed_page_id(), section_type)
}

pub fn get_seed_section_with_data(section_type: &str, data: Value) -> PageSection {
    let mut section = get_seed_section(section_type);
    section.data = Some(data);
    section
}

pub fn get_seed_hero() -> PageSection {
    let mut section = get_seed_section("hero");
    section.title = Some("Discover Dubai".to_string());
    section.title_he = Some("גלו את דובאי".to_string());
    section.subtitle = Some("Your guide to the city of gold".to_string());
    section.button_text = Some("Start exploring".to_string());
    section.button_link = Some("#attractions".to_string());
    section
}

pub fn get_seed_stats() -> PageSection {
    let mut section = get_seed_section_with_data(
        "stats",
        json!({
            "items": [
                { "value": "200", "label": "Restaurants", "suffix": "+" },
                { "value": 50, "label": "Beaches" }
            ]
        }),
    );
    section.title = Some("Dubai in numbers".to_string());
    section
}

pub fn get_seed_faq(count: usize) -> PageSection {
    let items: Vec<Value> = (0..count)
        .map(|i| json!({ "question": format!("Question {i}"), "answer": format!("Answer {i}") }))
        .collect();
    get_seed_section_with_data("faq", json!({ "items": items }))
}

pub fn get_seed_gallery(count: usize) -> PageSection {
    let mut section = get_seed_section("gallery");
    section.images = (0..count).map(|i| format!("photo-{i}.jpg")).collect();
    section
}

pub fn get_seed_testimonials() -> PageSection {
    get_seed_section_with_data(
        "testimonial",
        json!({
            "items": [
                { "quote": "Unforgettable desert safari", "author": "Dana", "rating": 5 },
                { "quote": "Great food tour", "author": "Omer", "rating": 4 },
                { "quote": "Loved the Marina walk", "author": "Lior" }
            ]
        }),
    )
}

pub fn ctx(locale: Locale) -> RenderContext {
    RenderContext::new(locale)
}

pub fn ctx_with_query(locale: Locale, query: &[(String, String)]) -> RenderContext {
    RenderContext::new(locale).with_state(ViewState::from_query(query.iter().cloned()))
}

/// Counts how often `needle` appears in `haystack`.
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
