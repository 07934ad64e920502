//! Genre descriptor types

use serde::{Deserialize, Serialize};

/// A genre descriptor: the catalog id the backend filters by plus the
/// display name the home screen titles its section with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Backend genre id, used as the `/getMovies/{genreID}` path segment.
    pub id: String,
    /// Section display name.
    pub name: String,
}

impl Genre {
    /// Create a genre descriptor.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The fixed section catalog the home screen is configured with.
    ///
    /// Callers may pass their own list instead; nothing else in the
    /// workspace assumes this particular set.
    pub fn default_catalog() -> Vec<Genre> {
        vec![
            Genre::new("28", "Action"),
            Genre::new("35", "Comedy"),
            Genre::new("27", "Horror"),
            Genre::new("10749", "Romance"),
            Genre::new("16", "Animation"),
            Genre::new("99", "Documentary"),
        ]
    }
}
