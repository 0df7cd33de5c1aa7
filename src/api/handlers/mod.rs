//! HTTP request handlers.

pub mod login_handler;
pub mod setup_handler;

pub use login_handler::login_routes;
pub use setup_handler::setup_routes;
