//! Catalog browsing operations.

use flick_core::Movie;
use reqwest::Client;
use tracing::debug;

use crate::client::{check_status, map_send_error, parse_json};
use crate::error::Result;

/// Catalog client: movie lists, text search, related titles.
pub struct CatalogClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> CatalogClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// List movies, optionally filtered to one genre.
    pub async fn list_movies(&self, genre_id: Option<&str>) -> Result<Vec<Movie>> {
        let url = match genre_id {
            Some(genre_id) => format!("{}/getMovies/{genre_id}", self.base_url),
            None => format!("{}/getMovies", self.base_url),
        };
        debug!(url = %url, "Fetching movie list");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let movies: Vec<Movie> = parse_json(response, "movie list").await?;

        debug!(count = movies.len(), genre = ?genre_id, "Fetched movie list");
        Ok(movies)
    }

    /// Free-text title search. The minimum-length gate lives in the search
    /// screen, not here; an empty query is the caller's mistake.
    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        let url = format!(
            "{}/searchMovies/{}",
            self.base_url,
            urlencoding::encode(query)
        );
        debug!(url = %url, query = %query, "Searching movies");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let movies: Vec<Movie> = parse_json(response, "search response").await?;

        debug!(results = movies.len(), "Search complete");
        Ok(movies)
    }

    /// Movies related to the given movie.
    pub async fn similar_movies(&self, movie_id: &str) -> Result<Vec<Movie>> {
        let url = format!("{}/getSimilarMovies/{movie_id}", self.base_url);
        debug!(url = %url, movie_id = %movie_id, "Fetching similar movies");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "similar movies").await
    }
}
