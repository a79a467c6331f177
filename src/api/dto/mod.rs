//! Data Transfer Objects for API responses.
//!
//! Every success body carries `status: "ok"`; error bodies are produced by
//! [`crate::error::AppError`].

pub mod health;
pub mod info;
pub mod rating;

/// Value of the `status` field on every successful response.
pub const STATUS_OK: &str = "ok";
