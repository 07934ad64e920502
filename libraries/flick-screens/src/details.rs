//! Movie-details coordinator: membership flags, toggles, similar titles.

use std::sync::Arc;

use flick_core::{format_runtime, movie_rating, movie_title, Movie};
use flick_server_client::Result;
use tracing::warn;

use crate::api::ServerApi;
use crate::notice::NoticeSlot;

/// Movie-details coordinator.
///
/// Keeps the "in my list" and "watched" flags consistent with the server
/// while the user toggles either one. Mutations are never trusted blindly:
/// the list toggle re-checks membership through the check endpoint after
/// the mutation, which also covers the case where a concurrent watched
/// toggle removed the movie from the list.
pub struct MovieDetailsScreen {
    api: Arc<dyn ServerApi>,
    pub movie: Movie,
    /// Whether the movie is in the viewer's my list.
    pub is_in_list: bool,
    /// Whether the movie is on the viewer's watched list.
    pub is_watched: bool,
    /// Related titles for the "More like this" rail.
    pub similar: Vec<Movie>,
    updating_watched: bool,
    pub notice: NoticeSlot,
}

impl MovieDetailsScreen {
    /// Create the coordinator for one movie.
    pub fn new(api: Arc<dyn ServerApi>, movie: Movie) -> Self {
        Self {
            api,
            movie,
            is_in_list: false,
            is_watched: false,
            similar: Vec::new(),
            updating_watched: false,
            notice: NoticeSlot::default(),
        }
    }

    /// Fetch membership, watched status, and similar titles together.
    ///
    /// The three results degrade independently: a failed membership check
    /// posts a notice, a failed watched check reads as "not watched", and
    /// failed similar titles just leave the rail empty.
    pub async fn load(&mut self) {
        let api = &*self.api;
        let id = self.movie.id.as_str();
        let (in_list, watched, similar) = tokio::join!(
            api.is_in_my_list(id),
            api.is_watched(id),
            api.similar_movies(id),
        );

        match in_list {
            Ok(in_list) => self.is_in_list = in_list,
            Err(e) => {
                warn!(movie_id = %id, error = %e, "Membership check failed");
                self.notice.post("Failed to check My List");
            }
        }

        self.is_watched = watched.unwrap_or(false);

        match similar {
            Ok(similar) => self.similar = similar,
            Err(e) => warn!(movie_id = %id, error = %e, "Similar movies fetch failed"),
        }
    }

    /// Toggle my-list membership.
    ///
    /// After the mutation, membership is re-read from the check endpoint
    /// and the flag set from that authoritative answer — not from the
    /// mutation's own payload.
    pub async fn toggle_my_list(&mut self) {
        let id = self.movie.id.clone();
        let mutation = if self.is_in_list {
            self.api.remove_from_my_list(&id).await.map(|_| ())
        } else {
            self.api.add_to_my_list(&id).await.map(|_| ())
        };

        let reconciled = match mutation {
            Ok(()) => self.api.is_in_my_list(&id).await,
            Err(e) => Err(e),
        };

        match reconciled {
            Ok(in_list) => {
                self.is_in_list = in_list;
                self.notice.post("The list has been updated");
            }
            Err(e) => {
                warn!(movie_id = %id, error = %e, "My-list toggle failed");
                self.notice.post("Failed to update list");
            }
        }
    }

    /// Toggle watched status.
    ///
    /// Serialized per screen instance: a second invocation while one is
    /// outstanding is a no-op. Marking a movie watched removes it from my
    /// list when present — a movie is never in both sets at once. The
    /// reverse direction is not coupled: re-adding a watched movie to the
    /// list does not unmark it.
    pub async fn toggle_watched(&mut self) {
        if self.updating_watched {
            return;
        }
        self.updating_watched = true;
        let result = self.toggle_watched_inner().await;
        self.updating_watched = false;

        if let Err(e) = result {
            warn!(movie_id = %self.movie.id, error = %e, "Watched toggle failed");
            self.notice.post("Failed to update watched list");
        }
    }

    async fn toggle_watched_inner(&mut self) -> Result<()> {
        let id = self.movie.id.clone();
        if self.is_watched {
            self.api.unmark_watched(&id).await?;
            self.is_watched = false;
        } else {
            self.api.mark_watched(&id, 0.0).await?;
            self.is_watched = true;
            if self.is_in_list {
                self.api.remove_from_my_list(&id).await?;
                self.is_in_list = false;
            }
        }
        Ok(())
    }

    /// Whether a watched toggle is currently in flight.
    pub fn is_updating_watched(&self) -> bool {
        self.updating_watched
    }

    /// Display title for the header.
    pub fn title(&self) -> String {
        movie_title(&self.movie)
    }

    /// Rating text for the rating pill.
    pub fn rating(&self) -> String {
        movie_rating(&self.movie)
    }

    /// Runtime text (`"2h 5m"`), empty when the backend has no runtime.
    pub fn runtime(&self) -> Option<String> {
        self.movie.runtime.map(format_runtime)
    }
}
