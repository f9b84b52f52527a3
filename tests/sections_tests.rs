mod common;

#[cfg(test)]
pub mod sections_tests {
    use serde_json::{json, Value};

    use super::common::*;

    use dunepress::common::*;
    use dunepress::models::*;
    use dunepress::sections::*;

    fn render_html(section: &PageSection, ctx: &RenderContext) -> String {
        SectionRegistry::with_builtins()
            .render(section, ctx, None)
            .expect("section should render")
            .html
    }

    #[test]
    fn test_registry_knows_every_builtin_type() {
        let registry = SectionRegistry::with_builtins();
        for section_type in SectionType::ALL {
            assert!(registry.contains(section_type.as_str()), "{section_type} missing");
        }
        assert_eq!(registry.tags().len(), SectionType::ALL.len());
    }

    #[test]
    fn test_render_invisible_section_is_omitted() {
        let mut section = get_seed_hero();
        section.is_visible = false;

        let registry = SectionRegistry::with_builtins();
        assert!(registry.render(&section, &ctx(Locale::En), None).is_none());
    }

    #[test]
    fn test_render_unknown_type_is_omitted() {
        let section = get_seed_section("carousel-3d");

        let registry = SectionRegistry::with_builtins();
        assert!(registry.render(&section, &ctx(Locale::En), None).is_none());
    }

    #[test]
    fn test_render_carries_id_type_and_class() {
        let section = get_seed_hero();
        let registry = SectionRegistry::with_builtins();

        let rendered = registry
            .render(&section, &ctx(Locale::En), Some("landing"))
            .unwrap();

        assert_eq!(rendered.id, section.id);
        assert_eq!(rendered.section_type, "hero");
        assert!(rendered.html.contains(&format!("id=\"section-{}\"", section.id)));
        assert!(rendered.html.contains(&format!("data-testid=\"section-hero-{}\"", section.id)));
        assert!(rendered.html.contains(" landing\""));
    }

    #[test]
    fn test_stats_render_items_in_order() {
        let html = render_html(&get_seed_stats(), &ctx(Locale::En));

        let first = html.find("data-testid=\"stat-0\"").unwrap();
        let second = html.find("data-testid=\"stat-1\"").unwrap();
        assert!(first < second);
        assert!(!html.contains("data-testid=\"stat-2\""));

        assert!(html.contains("Dubai in numbers"));
        assert!(html.contains("Restaurants"));
        assert!(html.contains("200"));
        assert!(html.contains("50"));
    }

    #[test]
    fn test_stats_empty_payload_keeps_chrome() {
        let mut section = get_seed_section("stats");
        section.title = Some("Dubai in numbers".to_string());

        let html = render_html(&section, &ctx(Locale::En));
        assert!(html.contains("Dubai in numbers"));
        assert!(!html.contains("data-testid=\"stat-0\""));
    }

    #[test]
    fn test_malformed_payload_renders_without_items() {
        let mut section = get_seed_section_with_data("stats", json!([1, 2, 3]));
        section.title = Some("Dubai in numbers".to_string());

        let html = render_html(&section, &ctx(Locale::En));
        assert!(html.contains(&format!("section-stats-{}", section.id)));
        assert!(html.contains("Dubai in numbers"));
        assert!(!html.contains("data-testid=\"stat-0\""));
    }

    #[test]
    fn test_stats_skip_unreadable_items() {
        let section = get_seed_section_with_data(
            "stats",
            json!({ "items": [
                { "value": "200+", "label": "Restaurants" },
                null,
                { "value": "70,000+", "label": "Residents" }
            ] }),
        );
        let html = render_html(&section, &ctx(Locale::En));

        assert!(html.contains("Restaurants"));
        assert!(html.contains("70,000+"));
        assert!(html.contains("Residents"));
        assert!(html.contains("data-testid=\"stat-1\""));
        assert!(!html.contains("data-testid=\"stat-2\""));
    }

    #[test]
    fn test_validate_rejects_unreadable_item() {
        let registry = SectionRegistry::with_builtins();
        let data = json!({ "items": [{ "value": "200+", "label": "Restaurants" }, null] });

        let err = registry.validate("stats", Some(&data), None).unwrap_err();
        assert!(matches!(
            err,
            SectionError::InvalidPayload {
                source: PayloadError::InvalidItem { index: 1, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_faq_entries_have_stable_keys() {
        let section = get_seed_faq(6);
        let html = render_html(&section, &ctx(Locale::En));

        assert_eq!(occurrences(&html, "data-key=\"faq-"), 6);
        for i in 0..6 {
            assert!(html.contains(&format!("data-key=\"faq-{i}\"")));
            assert!(html.contains(&format!("Question {i}")));
        }
        assert_eq!(occurrences(&html, " open>"), 0);
    }

    #[test]
    fn test_faq_open_entry_from_state() {
        let section = get_seed_faq(6);
        let closed = render_html(&section, &ctx(Locale::En));
        let open = render_html(
            &section,
            &ctx_with_query(Locale::En, &[(format!("q.{}", section.id), "3".to_string())]),
        );

        assert_eq!(occurrences(&open, " open>"), 1);
        assert!(open.contains(&format!("data-key=\"faq-3\" name=\"faq-{}\" open>", section.id)));
        for i in 0..6 {
            assert!(open.contains(&format!("Answer {i}")));
        }
        assert_eq!(
            occurrences(&closed, "data-key=\"faq-"),
            occurrences(&open, "data-key=\"faq-")
        );
    }

    #[test]
    fn test_faq_open_entry_out_of_range_is_ignored() {
        let section = get_seed_faq(2);
        let html = render_html(
            &section,
            &ctx_with_query(Locale::En, &[(format!("q.{}", section.id), "9".to_string())]),
        );
        assert_eq!(occurrences(&html, " open>"), 0);
    }

    #[test]
    fn test_gallery_without_images_is_omitted() {
        let section = get_seed_gallery(0);
        let registry = SectionRegistry::with_builtins();
        assert!(registry.render(&section, &ctx(Locale::En), None).is_none());
    }

    #[test]
    fn test_gallery_single_image_has_no_controls() {
        let html = render_html(&get_seed_gallery(1), &ctx(Locale::En));
        assert!(html.contains("data-testid=\"gallery-current\""));
        assert!(!html.contains("gallery-next"));
        assert!(!html.contains("gallery-dot-0"));
    }

    #[test]
    fn test_gallery_links_keep_extra_params() {
        let section = get_seed_gallery(3);
        let id = section.id;
        let state = ViewState::from_query([(format!("c.{id}"), "2")]).with_param("locale", "en");
        let html = render_html(&section, &RenderContext::new(Locale::En).with_state(state));

        assert!(html.contains(&format!("href=\"?locale=en&amp;c.{id}=0#section-{id}\"")));
        assert!(html.contains(&format!("href=\"?locale=en&amp;c.{id}=1#section-{id}\"")));
    }

    #[test]
    fn test_gallery_navigation_wraps() {
        let section = get_seed_gallery(3);
        let id = section.id;
        let html = render_html(
            &section,
            &ctx_with_query(Locale::En, &[(format!("c.{id}"), "2".to_string())]),
        );

        assert!(html.contains("data-index=\"2\""));
        assert!(html.contains("photo-2.jpg"));
        assert!(html.contains(&format!("href=\"?c.{id}=0#section-{id}\" data-testid=\"gallery-next\"")));
        assert!(html.contains(&format!("href=\"?c.{id}=1#section-{id}\" data-testid=\"gallery-prev\"")));
        assert_eq!(occurrences(&html, "data-testid=\"gallery-dot-"), 3);
        assert!(!html.contains("gallery-thumb-"));
    }

    #[test]
    fn test_gallery_out_of_range_cursor_starts_at_first() {
        let section = get_seed_gallery(3);
        let html = render_html(
            &section,
            &ctx_with_query(Locale::En, &[(format!("c.{}", section.id), "7".to_string())]),
        );
        assert!(html.contains("data-index=\"0\""));
    }

    #[test]
    fn test_gallery_thumbnails_are_capped() {
        let html = render_html(&get_seed_gallery(8), &ctx(Locale::En));
        assert_eq!(occurrences(&html, "data-testid=\"gallery-thumb-"), 6);
        assert_eq!(occurrences(&html, "data-testid=\"gallery-dot-"), 8);
    }

    #[test]
    fn test_testimonial_without_items_is_omitted() {
        let section = get_seed_section_with_data("testimonial", json!({ "items": [] }));
        let registry = SectionRegistry::with_builtins();
        assert!(registry.render(&section, &ctx(Locale::En), None).is_none());
    }

    #[test]
    fn test_testimonial_shows_one_quote_with_rating() {
        let html = render_html(&get_seed_testimonials(), &ctx(Locale::En));

        assert!(html.contains("Unforgettable desert safari"));
        assert!(!html.contains("Great food tour"));
        assert!(html.contains("data-testid=\"testimonial-rating\""));
        assert_eq!(occurrences(&html, "star-filled"), 5);
        assert_eq!(occurrences(&html, "data-testid=\"testimonial-dot-"), 3);
    }

    #[test]
    fn test_testimonial_without_rating_hides_stars() {
        let section = get_seed_testimonials();
        let id = section.id;
        let html = render_html(
            &section,
            &ctx_with_query(Locale::En, &[(format!("c.{id}"), "2".to_string())]),
        );

        assert!(html.contains("Loved the Marina walk"));
        assert!(!html.contains("testimonial-rating"));
        assert!(html.contains(&format!("href=\"?c.{id}=0#section-{id}\" data-testid=\"testimonial-next\"")));
    }

    #[test]
    fn test_testimonial_arrows_follow_reading_direction() {
        let section = get_seed_testimonials();

        let ltr = render_html(&section, &ctx(Locale::En));
        let rtl = render_html(&section, &ctx(Locale::He));

        let ltr_next = &ltr[ltr.find("data-testid=\"testimonial-next\"").unwrap()..];
        let rtl_next = &rtl[rtl.find("data-testid=\"testimonial-next\"").unwrap()..];
        assert!(ltr_next.contains("icon-arrow-right"));
        assert!(rtl_next.contains("icon-arrow-left"));
    }

    #[test]
    fn test_locale_resolves_secondary_text() {
        let section = get_seed_hero();

        let en = render_html(&section, &ctx(Locale::En));
        let he = render_html(&section, &ctx(Locale::He));

        assert!(en.contains("Discover Dubai"));
        assert!(!en.contains("גלו את דובאי"));
        assert!(he.contains("גלו את דובאי"));
        assert!(!he.contains("Discover Dubai"));
    }

    #[test]
    fn test_locale_falls_back_to_primary_text() {
        let mut section = get_seed_hero();
        section.title_he = Some(String::new());

        let he = render_html(&section, &ctx(Locale::He));
        assert!(he.contains("Discover Dubai"));
        assert!(he.contains("Your guide to the city of gold"));
        assert!(he.contains("Start exploring"));
        assert!(he.contains(" text-right"));
    }

    #[test]
    fn test_locale_resolves_secondary_payload() {
        let mut section = get_seed_stats();
        section.data_he = Some(json!({ "items": [{ "value": "7", "label": "אמירויות" }] }));

        let en = render_html(&section, &ctx(Locale::En));
        let he = render_html(&section, &ctx(Locale::He));

        assert!(en.contains("Restaurants"));
        assert!(he.contains("אמירויות"));
        assert!(!he.contains("Restaurants"));
        assert!(!he.contains("data-testid=\"stat-1\""));

        section.data_he = Some(Value::Null);
        let he = render_html(&section, &ctx(Locale::He));
        assert!(he.contains("Restaurants"));
    }

    #[test]
    fn test_hero_button_needs_text_and_link() {
        let mut section = get_seed_hero();
        section.button_link = None;

        let html = render_html(&section, &ctx(Locale::En));
        assert!(!html.contains("hero-cta"));
    }

    #[test]
    fn test_highlight_icons_fall_back_to_star() {
        let section = get_seed_section_with_data(
            SectionType::HighlightGrid.as_str(),
            json!({ "items": [
                { "icon": "camel", "title": "Desert" },
                { "icon": "MapPin", "title": "Old Town" }
            ] }),
        );
        let html = render_html(&section, &ctx(Locale::En));

        let first = &html[html.find("highlight-0").unwrap()..html.find("highlight-1").unwrap()];
        assert!(first.contains("icon-star"));
        assert!(html[html.find("highlight-1").unwrap()..].contains("icon-map-pin"));
    }

    #[test]
    fn test_feature_icons_fall_back_to_check() {
        let section = get_seed_section_with_data(
            "features",
            json!({ "items": [{ "title": "Free cancellation" }] }),
        );
        let html = render_html(&section, &ctx(Locale::En));

        assert!(html.contains("data-testid=\"feature-0\""));
        assert!(html.contains("icon-check"));
    }

    #[test]
    fn test_newsletter_form_is_localized() {
        let section = get_seed_section("newsletter");

        let en = render_html(&section, &ctx(Locale::En));
        let he = render_html(&section, &ctx(Locale::He));

        assert!(en.contains("Subscribe"));
        assert!(en.contains("name=\"locale\" value=\"en\""));
        assert!(he.contains("הרשמה"));
        assert!(he.contains("כתובת אימייל"));
        assert!(he.contains("name=\"locale\" value=\"he\""));
        assert!(he.contains(&format!("name=\"section_id\" value=\"{}\"", section.id)));
    }

    #[test]
    fn test_assembler_keeps_input_order() {
        let mut hero = get_seed_hero();
        hero.sort_order = 2;
        let mut stats = get_seed_stats();
        stats.sort_order = 0;
        let mut faq = get_seed_faq(2);
        faq.sort_order = 1;
        let mut hidden = get_seed_gallery(2);
        hidden.sort_order = 3;
        hidden.is_visible = false;

        let registry = SectionRegistry::with_builtins();
        let sections = vec![hero.clone(), stats.clone(), faq.clone(), hidden];
        let page = PageAssembler::new(&registry).assemble(&sections, &ctx(Locale::En));

        let ids: Vec<_> = page.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![hero.id, stats.id, faq.id]);
    }

    #[test]
    fn test_assembler_keeps_input_order_on_equal_sort_order() {
        let first = get_seed_hero();
        let second = get_seed_stats();

        let registry = SectionRegistry::with_builtins();
        let page = PageAssembler::new(&registry)
            .assemble(&[first.clone(), second.clone()], &ctx(Locale::En));

        let ids: Vec<_> = page.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_assembler_is_idempotent() {
        let sections = vec![get_seed_hero(), get_seed_stats(), get_seed_faq(3), get_seed_gallery(5)];
        let registry = SectionRegistry::with_builtins();
        let assembler = PageAssembler::new(&registry).with_class("landing");
        let ctx = ctx(Locale::He);

        let first = assembler.assemble(&sections, &ctx);
        let second = assembler.assemble(&sections, &ctx);

        assert_eq!(first, second);
        assert_eq!(first.sections.len(), 4);
        assert_eq!(first.html(), second.html());
    }

    #[test]
    fn test_assembler_empty_page() {
        let registry = SectionRegistry::with_builtins();
        let page = PageAssembler::new(&registry).assemble(&[], &ctx(Locale::En));
        assert!(page.is_empty());
        assert_eq!(page.html(), "");
    }

    #[test]
    fn test_validate_accepts_well_formed_payloads() {
        let registry = SectionRegistry::with_builtins();
        let data = json!({ "items": [{ "question": "Visa?", "answer": "On arrival" }] });

        assert!(registry.validate("faq", Some(&data), None).is_ok());
        assert!(registry.validate("hero", None, None).is_ok());
        assert!(registry.validate("gallery", Some(&json!({ "anything": 1 })), None).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_type() {
        let registry = SectionRegistry::with_builtins();
        let err = registry.validate("carousel-3d", None, None).unwrap_err();
        assert!(matches!(err, SectionError::UnknownType(t) if t == "carousel-3d"));
    }

    #[test]
    fn test_validate_rejects_malformed_secondary_payload() {
        let registry = SectionRegistry::with_builtins();
        let good = json!({ "items": [] });
        let bad = json!({ "items": "not a list" });

        let err = registry.validate("stats", Some(&good), Some(&bad)).unwrap_err();
        assert!(matches!(
            err,
            SectionError::InvalidPayload { ref section_type, .. } if section_type == "stats"
        ));
    }

    struct MapRenderer;

    impl SectionRenderer for MapRenderer {
        type Payload = Value;

        fn render(
            &self,
            section: &ResolvedSection<'_>,
            payload: Value,
        ) -> Result<Option<String>, askama::Error> {
            let zoom = payload.get("zoom").and_then(Value::as_u64).unwrap_or(10);
            Ok(Some(format!(
                "<div id=\"{}\" data-zoom=\"{zoom}\"></div>",
                section.anchor()
            )))
        }
    }

    #[test]
    fn test_custom_renderer_can_be_registered() {
        let mut registry = SectionRegistry::with_builtins();
        registry.register("map", MapRenderer);

        let section = get_seed_section_with_data("map", json!({ "zoom": 14 }));
        let rendered = registry.render(&section, &ctx(Locale::En), None).unwrap();

        assert_eq!(
            rendered.html,
            format!("<div id=\"section-{}\" data-zoom=\"14\"></div>", section.id)
        );
        assert!(registry.tags().contains(&"map"));
    }

    #[test]
    fn test_empty_registry_renders_nothing() {
        let registry = SectionRegistry::empty();
        assert!(registry.render(&get_seed_hero(), &ctx(Locale::En), None).is_none());
        assert!(registry.tags().is_empty());
    }
}
