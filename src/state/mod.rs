//! Application state module

mod app_state;
mod form;
mod validate;
mod wizard;

pub use app_state::*;
pub use form::*;
pub use validate::*;
pub use wizard::*;
