//! Watched-list entry type
use serde::{Deserialize, Serialize};

use crate::types::Movie;

/// One entry in a user's watched list: the movie plus how far into it the
/// user got. `watched_time` is in seconds and intended to be monotonic,
/// but the backend does not validate that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedEntry {
    /// The watched movie.
    pub movie: Movie,

    /// Playback position in seconds.
    #[serde(default)]
    pub watched_time: f64,
}
