pub mod admin_images;
pub mod admin_sections;
pub mod newsletter;
pub mod public;

use actix_web::web;

/// Registers every route. Public routes go last: `/{locale}` would
/// otherwise shadow single-segment admin and form paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    admin_sections::configure(cfg);
    admin_images::configure(cfg);
    newsletter::configure(cfg);
    public::configure(cfg);
}
