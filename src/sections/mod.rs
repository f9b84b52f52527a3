//! Section rendering: the registry that maps a stored `section_type` to its
//! renderer, the built-in renderers, and the page assembler on top.

pub mod assembler;
pub mod carousel;
pub mod context;
pub mod icons;
pub mod payload;
pub mod registry;
pub mod renderers;

pub use assembler::{PageAssembler, RenderedPage};
pub use carousel::{Accordion, AccordionMode, Carousel};
pub use context::{RenderContext, ViewState};
pub use icons::{Glyph, IconSet, FEATURE_ICONS, HIGHLIGHT_ICONS};
pub use payload::{RejectedItem, SectionPayload};
pub use registry::{RenderedSection, ResolvedSection, SectionRegistry, SectionRenderer};
