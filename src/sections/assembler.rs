use tracing::debug;

use crate::models::PageSection;
use crate::sections::{RenderContext, RenderedSection, SectionRegistry};

/// The rendered sections of one page, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    pub sections: Vec<RenderedSection>,
}

impl RenderedPage {
    pub fn html(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Turns a page's section list into HTML, one registry call per section.
pub struct PageAssembler<'r> {
    registry: &'r SectionRegistry,
    class: Option<String>,
}

impl<'r> PageAssembler<'r> {
    pub fn new(registry: &'r SectionRegistry) -> Self {
        Self {
            registry,
            class: None,
        }
    }

    /// Extra CSS class applied to every section.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Renders `sections` in the order given; ordering is the caller's job
    /// (the section store returns them by `sort_order`). Sections the
    /// registry omits are skipped.
    pub fn assemble(&self, sections: &[PageSection], ctx: &RenderContext) -> RenderedPage {
        let rendered: Vec<RenderedSection> = sections
            .iter()
            .filter_map(|section| self.registry.render(section, ctx, self.class.as_deref()))
            .collect();

        debug!(
            total = sections.len(),
            rendered = rendered.len(),
            locale = %ctx.locale.locale,
            "Assembled page"
        );

        RenderedPage { sections: rendered }
    }
}
