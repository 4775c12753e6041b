//! Form screens, one per wizard step

mod account;
mod field_renderer;
mod location;
mod organization;

pub use account::draw_account;
pub use location::draw_location;
pub use organization::draw_organization;
