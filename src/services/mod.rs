pub use image_engine::*;
pub use newsletter::*;
pub use notice::*;

mod image_engine;
mod newsletter;
mod notice;
