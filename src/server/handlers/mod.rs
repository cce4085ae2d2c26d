//! Request handlers.

mod status;
mod validate;

pub use status::status_handler;
pub use validate::validate_handler;
