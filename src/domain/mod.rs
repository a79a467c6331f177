//! Domain layer: lookup values and the rating source contract.
//!
//! # Architecture
//!
//! - [`entities`] - Identifier, query and result types
//! - [`sources`] - The [`sources::RatingSource`] trait implemented by
//!   `crate::infrastructure::imdb`
//!
//! The domain layer has no knowledge of HTTP, HTML or reqwest; those live
//! in the infrastructure and API layers.

pub mod entities;
pub mod sources;
