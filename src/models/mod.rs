pub use image::*;
pub use locale::*;
pub use newsletter::*;
pub use page::*;
pub use section::*;
pub use section_type::*;

mod image;
mod locale;
mod newsletter;
mod page;
mod section;
mod section_type;
