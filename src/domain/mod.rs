//! Domain layer for the popcorn plugin.
//!
//! Core movie types and error types, independent of Zellij APIs and of the
//! wire format of the remote movie service.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Search results, movie details, ratings and watched records

pub mod error;
pub mod movie;

pub use error::{FetchError, PopcornError, Result};
pub use movie::{MovieDetail, SearchResultItem, UserRating, WatchedMovieRecord};
