//! Core domain values for rating lookups.
//!
//! Everything here is request-scoped and immutable once built, except
//! [`ServiceInfo`], which is built once at startup and shared.
//!
//! # Entity Types
//!
//! - [`ImdbId`] - A validated `tt`-prefixed title identifier
//! - [`EpisodeRef`] - A season/episode pair
//! - [`RatingQuery`] - One lookup request, series or episode level
//! - [`SourceRating`] - What the external source reported
//! - [`RatingResult`] - The normalized answer returned to clients
//! - [`ServiceInfo`] - Static service description

pub mod imdb_id;
pub mod rating;
pub mod service_info;

pub use imdb_id::ImdbId;
pub use rating::{EpisodeRef, RatingQuery, RatingResult, SourceRating};
pub use service_info::ServiceInfo;
