//! Business logic services for the application layer.

pub mod rating_service;

pub use rating_service::RatingService;
