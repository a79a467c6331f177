//! Infrastructure layer: concrete implementations of domain traits.
//!
//! - [`imdb`] - IMDb web pages as a [`crate::domain::sources::RatingSource`]

pub mod imdb;
