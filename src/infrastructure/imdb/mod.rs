//! IMDb rating source.
//!
//! - [`client`] - reqwest client implementing [`crate::domain::sources::RatingSource`]
//! - [`scrape`] - HTML extraction of ratings, vote counts and titles

pub mod client;
pub mod error;
pub mod scrape;

pub use client::{ImdbClient, ImdbClientSettings};
pub use error::ImdbError;
