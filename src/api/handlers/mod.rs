//! HTTP request handlers for API endpoints.

pub mod document;
pub mod fallback;
pub mod health;

pub use document::generate_word_handler;
pub use fallback::not_found_handler;
pub use health::health_handler;
