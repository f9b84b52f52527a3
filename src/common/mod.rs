pub use config::*;
pub use errors::*;

mod config;
mod errors;
mod macros;
