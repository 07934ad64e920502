//! Watched-list screen coordinator.

use std::sync::Arc;

use flick_core::Movie;
use tracing::warn;

use crate::api::ServerApi;
use crate::Activate;

/// Watched-list coordinator.
///
/// Refetches the list every time the screen regains focus; a failed fetch
/// degrades to an empty list rather than keeping stale entries around.
pub struct WatchedScreen {
    api: Arc<dyn ServerApi>,
    /// Movies on the watched list, in server order.
    pub movies: Vec<Movie>,
}

impl WatchedScreen {
    pub fn new(api: Arc<dyn ServerApi>) -> Self {
        Self {
            api,
            movies: Vec::new(),
        }
    }
}

#[async_trait::async_trait]
impl Activate for WatchedScreen {
    async fn on_activate(&mut self) {
        match self.api.watched_movies().await {
            Ok(entries) => {
                self.movies = entries.into_iter().map(|entry| entry.movie).collect();
            }
            Err(e) => {
                warn!(error = %e, "Watched list fetch failed");
                self.movies.clear();
            }
        }
    }
}
