//! Authentication and session operations.

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::client::{check_status, map_send_error, parse_json};
use crate::error::Result;
use crate::types::{AuthOutcome, AuthResponseWire, LoginRequest, NewAccount, SessionCheck};

/// Authentication client for the Flick backend.
///
/// Login and registration report business failures (wrong password,
/// duplicate username) through [`AuthOutcome::Rejected`], never through
/// the error channel: those responses arrive as 2xx with `success: false`.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with username and password.
    ///
    /// On success the backend sets the session cookie on this client's
    /// cookie store; every later request carries it automatically.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthOutcome> {
        let url = format!("{}/login", self.base_url);
        debug!(url = %url, username = %username, "Attempting login");

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;
        let response = check_status(response).await?;
        let wire: AuthResponseWire = parse_json(response, "login response").await?;

        let outcome = wire.into_outcome()?;
        match &outcome {
            AuthOutcome::Granted(user) => {
                info!(username = %user.username, user_id = %user.id, "Login successful");
            }
            AuthOutcome::Rejected { message } => {
                warn!(username = %username, reason = ?message, "Login rejected");
            }
        }
        Ok(outcome)
    }

    /// Create a new account.
    pub async fn register(&self, account: &NewAccount) -> Result<AuthOutcome> {
        let url = format!("{}/register", self.base_url);
        debug!(url = %url, username = %account.username, "Registering account");

        let response = self
            .http
            .post(&url)
            .json(account)
            .send()
            .await
            .map_err(map_send_error)?;
        let response = check_status(response).await?;
        let wire: AuthResponseWire = parse_json(response, "register response").await?;

        let outcome = wire.into_outcome()?;
        if let AuthOutcome::Rejected { message } = &outcome {
            warn!(username = %account.username, reason = ?message, "Registration rejected");
        }
        Ok(outcome)
    }

    /// One-shot session check performed at app entry.
    pub async fn check_session(&self) -> Result<SessionCheck> {
        let url = format!("{}/check-auth", self.base_url);
        debug!(url = %url, "Checking session");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        let response = check_status(response).await?;
        let check: SessionCheck = parse_json(response, "check-auth response").await?;

        debug!(authenticated = check.authenticated, "Session checked");
        Ok(check)
    }

    /// End the server-side session. The caller is responsible for clearing
    /// its persisted user snapshot alongside this call.
    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/logout", self.base_url);
        debug!(url = %url, "Logging out");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        check_status(response).await?;
        info!("Logged out");
        Ok(())
    }
}
