//! Rating source trait definitions.
//!
//! - Traits define the contract for fetching ratings from an external provider
//! - Implementations live in `crate::infrastructure::imdb`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod rating_source;

pub use rating_source::RatingSource;

#[cfg(test)]
pub use rating_source::MockRatingSource;
