//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies are deserialized with Serde and checked with `validator`.

pub mod document;
pub mod health;
