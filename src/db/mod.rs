pub use db::*;
pub use newsletter::*;
pub use pages::*;
pub use sections::*;

mod db;
mod newsletter;
mod pages;
mod sections;
