//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into rating queries and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and panic recovery
//! - [`routes`] - Rating route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
