//! Flick Core
//!
//! Domain types and pure display helpers for the Flick movie client.
//!
//! This crate holds the wire-faithful entity types shared by every other
//! crate in the workspace, plus the small derivation helpers the screens
//! need (title resolution, rating formatting, release-date ordering).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Movie`, `User`, `Genre`, `WatchedEntry`
//! - **Display Helpers**: `movie_title`, `movie_rating`, `latest_movies`, ...
//!
//! Entities are owned by the backend; the client only holds transient
//! copies and never mutates a `Movie` — membership relations are changed
//! through the server and re-read from its responses.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod display;
pub mod types;

// Re-export commonly used types
pub use display::{
    format_playback_position, format_runtime, latest_movies, movie_rating, movie_title,
};
pub use types::{Gender, Genre, Movie, User, WatchedEntry};
