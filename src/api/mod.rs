//! HTTP layer for the form filler.
//!
//! Translates requests into [`crate::application::services::DocumentService`]
//! calls and shapes the responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
