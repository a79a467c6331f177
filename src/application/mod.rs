//! Application layer services.
//!
//! Services sit between the HTTP handlers and the rating source: they
//! take validated domain values, call the source trait, and turn its
//! answers into results or typed errors.
//!
//! # Available Services
//!
//! - [`services::rating_service::RatingService`] - Series and episode rating lookups

pub mod services;
