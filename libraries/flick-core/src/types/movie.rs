//! Movie domain type
use serde::{Deserialize, Serialize};

/// A movie as served by the catalog backend.
///
/// Immutable from the client's perspective: the client never changes a
/// movie, only the membership relations (my-list, watched) that reference
/// its id. Field names follow the backend's camelCase wire format, with
/// the Mongo-style `_id` mapped onto [`Movie::id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Opaque unique identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,

    /// Display title. May be absent or empty; see `display::movie_title`.
    pub title: Option<String>,

    /// Original-language title, used when `title` is missing.
    pub original_title: Option<String>,

    /// Poster image path, relative to the image CDN.
    pub poster_path: Option<String>,

    /// Synopsis text.
    pub overview: Option<String>,

    /// Release date as an ISO date string (`YYYY-MM-DD` or RFC 3339).
    pub release_date: Option<String>,

    /// Runtime in minutes.
    pub runtime: Option<u32>,

    /// Ordered genre names.
    #[serde(default)]
    pub genres: Vec<String>,

    /// Numeric rating; absent ratings render as `"N/A"`.
    pub rate: Option<f64>,

    /// Playback reference (placeholder source in this client).
    pub download_link: Option<String>,
}

impl Movie {
    /// Create a movie with just an id and title, for tests and fixtures.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            original_title: None,
            poster_path: None,
            overview: None,
            release_date: None,
            runtime: None,
            genres: Vec::new(),
            rate: None,
            download_link: None,
        }
    }
}
