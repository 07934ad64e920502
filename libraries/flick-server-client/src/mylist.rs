//! My-list membership operations.
//!
//! Mutations return the server's refreshed [`User`] record; callers treat
//! the echoed `mylist` set as authoritative instead of flipping local
//! state, so a server-side rejection or dedupe can never cause drift.

use flick_core::{Movie, User};
use reqwest::Client;
use tracing::debug;

use crate::client::{check_status, map_send_error, parse_json};
use crate::error::Result;
use crate::types::{InListResponse, MyListIdsResponse, MyListResponse, UserEnvelope};

/// My-list client.
pub struct MyListClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> MyListClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Add a movie to the list. Idempotent at the server.
    pub async fn add(&self, movie_id: &str) -> Result<User> {
        let url = format!("{}/add-to-mylist/{movie_id}", self.base_url);
        debug!(url = %url, movie_id = %movie_id, "Adding movie to my list");

        let response = self.http.post(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let envelope: UserEnvelope = parse_json(response, "add-to-mylist response").await?;

        debug!(mylist_len = envelope.user.mylist.len(), "My list updated");
        Ok(envelope.user)
    }

    /// Remove a movie from the list.
    pub async fn remove(&self, movie_id: &str) -> Result<User> {
        let url = format!("{}/remove-from-mylist/{movie_id}", self.base_url);
        debug!(url = %url, movie_id = %movie_id, "Removing movie from my list");

        let response = self.http.post(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let envelope: UserEnvelope = parse_json(response, "remove-from-mylist response").await?;

        debug!(mylist_len = envelope.user.mylist.len(), "My list updated");
        Ok(envelope.user)
    }

    /// The full movie objects currently in the list.
    pub async fn movies(&self) -> Result<Vec<Movie>> {
        let url = format!("{}/mylist", self.base_url);
        debug!(url = %url, "Fetching my list");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let body: MyListResponse = parse_json(response, "mylist response").await?;
        Ok(body.movies_in_my_list)
    }

    /// Just the id set — the cheap membership-check source.
    pub async fn ids(&self) -> Result<Vec<String>> {
        let url = format!("{}/mylistid", self.base_url);
        debug!(url = %url, "Fetching my list ids");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let body: MyListIdsResponse = parse_json(response, "mylistid response").await?;
        Ok(body.mylist)
    }

    /// Authoritative single-movie membership check.
    pub async fn contains(&self, movie_id: &str) -> Result<bool> {
        let url = format!("{}/check-in-mylist/{movie_id}", self.base_url);
        debug!(url = %url, movie_id = %movie_id, "Checking my-list membership");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let body: InListResponse = parse_json(response, "check-in-mylist response").await?;
        Ok(body.is_in_list)
    }
}
