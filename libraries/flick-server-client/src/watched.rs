//! Watched-list operations.

use flick_core::WatchedEntry;
use reqwest::Client;
use tracing::debug;

use crate::client::{check_status, map_send_error, parse_json};
use crate::error::Result;
use crate::types::{
    InWatchedResponse, RemoveWatchedRequest, WatchedMoviesResponse, WatchedTimeRequest,
    WatchtimeResponse,
};

/// Watched-list client.
pub struct WatchedClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> WatchedClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Mark a movie watched, recording the playback position in seconds.
    /// Pass `0.0` when marking from a toggle rather than the player.
    pub async fn mark(&self, movie_id: &str, watched_time: f64) -> Result<()> {
        let url = format!("{}/update-watched-time/{movie_id}", self.base_url);
        debug!(url = %url, movie_id = %movie_id, watched_time, "Marking movie watched");

        let body = WatchedTimeRequest { watched_time };
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;
        check_status(response).await?;
        Ok(())
    }

    /// Remove a movie from the watched list.
    pub async fn unmark(&self, movie_id: &str) -> Result<()> {
        let url = format!("{}/remove-watched-movie/{movie_id}", self.base_url);
        debug!(url = %url, movie_id = %movie_id, "Removing movie from watched list");

        let body = RemoveWatchedRequest {
            movie_id: movie_id.to_string(),
        };
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;
        check_status(response).await?;
        Ok(())
    }

    /// The recorded playback position for a movie, in seconds.
    pub async fn watchtime(&self, movie_id: &str) -> Result<f64> {
        let url = format!("{}/watched-time/{movie_id}", self.base_url);
        debug!(url = %url, movie_id = %movie_id, "Fetching watchtime");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let body: WatchtimeResponse = parse_json(response, "watched-time response").await?;
        Ok(body.watchtime)
    }

    /// All watched entries with their playback positions.
    pub async fn movies(&self) -> Result<Vec<WatchedEntry>> {
        let url = format!("{}/watched-movies", self.base_url);
        debug!(url = %url, "Fetching watched movies");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let body: WatchedMoviesResponse = parse_json(response, "watched-movies response").await?;

        debug!(count = body.watched_movies.len(), "Fetched watched movies");
        Ok(body.watched_movies)
    }

    /// Authoritative watched-status check for one movie.
    pub async fn contains(&self, movie_id: &str) -> Result<bool> {
        let url = format!("{}/is-in-watched-list/{movie_id}", self.base_url);
        debug!(url = %url, movie_id = %movie_id, "Checking watched membership");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let body: InWatchedResponse = parse_json(response, "is-in-watched-list response").await?;
        Ok(body.is_in_watched_movies)
    }
}
