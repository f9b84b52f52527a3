use std::collections::HashMap;

use serde_json::Value;
use tracing::{error, warn};
use uuid::Uuid;

use crate::common::{PayloadError, SectionError};
use crate::models::{resolve, resolve_value, Locale, PageSection};
use crate::sections::payload::{parse_payload, SectionPayload};
use crate::sections::renderers;
use crate::sections::RenderContext;

/// Renders one section type.
///
/// `Payload` is the typed shape of the section's `data`. The registry parses
/// it before calling [`SectionRenderer::render`]; a payload that fails to
/// parse is logged and replaced with `Payload::default()`, so the renderer
/// still draws the section's chrome. List items that fail to parse are
/// logged and skipped.
pub trait SectionRenderer: Send + Sync + 'static {
    type Payload: SectionPayload;

    /// `Ok(None)` omits the section from the page.
    fn render(
        &self,
        section: &ResolvedSection<'_>,
        payload: Self::Payload,
    ) -> Result<Option<String>, askama::Error>;
}

/// A section seen through the active locale.
pub struct ResolvedSection<'a> {
    pub section: &'a PageSection,
    pub ctx: &'a RenderContext,
    pub class: Option<&'a str>,
}

impl<'a> ResolvedSection<'a> {
    pub fn id(&self) -> Uuid {
        self.section.id
    }

    pub fn locale(&self) -> Locale {
        self.ctx.locale.locale
    }

    pub fn is_rtl(&self) -> bool {
        self.ctx.locale.is_rtl()
    }

    pub fn class(&self) -> String {
        self.class.unwrap_or_default().to_string()
    }

    /// DOM id; carousel and FAQ links scroll back to it.
    pub fn anchor(&self) -> String {
        format!("section-{}", self.section.id)
    }

    fn text(&self, primary: &Option<String>, secondary: &Option<String>) -> Option<String> {
        resolve(self.locale(), primary.as_deref(), secondary.as_deref())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    }

    pub fn title(&self) -> Option<String> {
        self.text(&self.section.title, &self.section.title_he)
    }

    pub fn subtitle(&self) -> Option<String> {
        self.text(&self.section.subtitle, &self.section.subtitle_he)
    }

    pub fn description(&self) -> Option<String> {
        self.text(&self.section.description, &self.section.description_he)
    }

    pub fn button_text(&self) -> Option<String> {
        self.text(&self.section.button_text, &self.section.button_text_he)
    }

    pub fn button_link(&self) -> Option<String> {
        self.section
            .button_link
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn data(&self) -> Option<&'a Value> {
        resolve_value(
            self.locale(),
            self.section.data.as_ref(),
            self.section.data_he.as_ref(),
        )
    }

    pub fn images(&self) -> Vec<String> {
        self.section
            .images
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn background_image(&self) -> Option<String> {
        self.section
            .background_image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn background_color(&self) -> Option<String> {
        self.section
            .background_color
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Rendered HTML of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub id: Uuid,
    pub section_type: String,
    pub html: String,
}

/// Object-safe face of [`SectionRenderer`], with the payload type erased.
trait DynRenderer: Send + Sync {
    fn check(&self, data: Option<&Value>) -> Result<(), PayloadError>;

    fn render_dyn(&self, section: &ResolvedSection<'_>) -> Result<Option<String>, askama::Error>;
}

impl<R: SectionRenderer> DynRenderer for R {
    fn check(&self, data: Option<&Value>) -> Result<(), PayloadError> {
        let payload = parse_payload::<R::Payload>(data)?;
        match payload.rejected_items().first() {
            Some(item) => Err(PayloadError::InvalidItem {
                index: item.index,
                reason: item.reason.clone(),
            }),
            None => Ok(()),
        }
    }

    fn render_dyn(&self, section: &ResolvedSection<'_>) -> Result<Option<String>, askama::Error> {
        let payload = match parse_payload::<R::Payload>(section.data()) {
            Ok(payload) => {
                for item in payload.rejected_items() {
                    warn!(
                        section_id = %section.id(),
                        section_type = %section.section.section_type,
                        index = item.index,
                        reason = %item.reason,
                        "Skipping unreadable item"
                    );
                }
                payload
            }
            Err(e) => {
                warn!(
                    section_id = %section.id(),
                    section_type = %section.section.section_type,
                    error = %e,
                    "Section payload does not match its type, rendering without it"
                );
                R::Payload::default()
            }
        };
        self.render(section, payload)
    }
}

/// Maps section-type tags to renderers.
///
/// The tag set is open: stored content decides which tags exist, and new
/// renderers can be registered at startup without touching the data layer.
pub struct SectionRegistry {
    renderers: HashMap<String, Box<dyn DynRenderer>>,
}

impl SectionRegistry {
    /// A registry with no renderers.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// A registry with every built-in section type.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        renderers::register_builtins(&mut registry);
        registry
    }

    /// Registers `renderer` for `tag`, replacing any previous renderer.
    pub fn register<R: SectionRenderer>(&mut self, tag: impl Into<String>, renderer: R) -> &mut Self {
        self.renderers.insert(tag.into(), Box::new(renderer));
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Renders one section. Invisible sections, unknown tags and sections
    /// whose template fails all produce `None`; none of them are fatal.
    pub fn render(
        &self,
        section: &PageSection,
        ctx: &RenderContext,
        class: Option<&str>,
    ) -> Option<RenderedSection> {
        if !section.is_visible {
            return None;
        }

        let Some(renderer) = self.renderers.get(&section.section_type) else {
            warn!(
                section_id = %section.id,
                section_type = %section.section_type,
                "Unknown section type"
            );
            return None;
        };

        let resolved = ResolvedSection {
            section,
            ctx,
            class,
        };

        match renderer.render_dyn(&resolved) {
            Ok(Some(html)) => Some(RenderedSection {
                id: section.id,
                section_type: section.section_type.clone(),
                html,
            }),
            Ok(None) => None,
            Err(e) => {
                let err = SectionError::from(e);
                error!(
                    section_id = %section.id,
                    section_type = %section.section_type,
                    error = %err,
                    "Failed to render section"
                );
                None
            }
        }
    }

    /// Authoring-time check: the tag must be registered and both locale
    /// payloads must parse as that renderer's payload.
    pub fn validate(
        &self,
        section_type: &str,
        data: Option<&Value>,
        data_he: Option<&Value>,
    ) -> Result<(), SectionError> {
        let renderer = self
            .renderers
            .get(section_type)
            .ok_or_else(|| SectionError::UnknownType(section_type.to_string()))?;

        for payload in [data, data_he] {
            renderer
                .check(payload)
                .map_err(|source| SectionError::InvalidPayload {
                    section_type: section_type.to_string(),
                    source,
                })?;
        }

        Ok(())
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for SectionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}
