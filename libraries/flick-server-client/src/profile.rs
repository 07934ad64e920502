//! Profile update operations.

use reqwest::Client;
use tracing::{debug, warn};

use crate::client::{check_status, map_send_error, parse_json};
use crate::error::Result;
use crate::types::{AuthOutcome, AuthResponseWire, ProfileUpdate};

/// Profile client for the Flick backend.
pub struct ProfileClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> ProfileClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Update the authenticated user's profile fields.
    ///
    /// Validation rejections come back as [`AuthOutcome::Rejected`] with
    /// the backend's message, for inline display next to the form.
    pub async fn update(&self, profile: &ProfileUpdate) -> Result<AuthOutcome> {
        let url = format!("{}/profile", self.base_url);
        debug!(url = %url, "Updating profile");

        let response = self
            .http
            .put(&url)
            .json(profile)
            .send()
            .await
            .map_err(map_send_error)?;
        let response = check_status(response).await?;
        let wire: AuthResponseWire = parse_json(response, "profile response").await?;

        let outcome = wire.into_outcome()?;
        if let AuthOutcome::Rejected { message } = &outcome {
            warn!(reason = ?message, "Profile update rejected");
        }
        Ok(outcome)
    }
}
