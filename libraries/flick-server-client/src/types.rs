//! Types for Flick backend API requests and responses.

use flick_core::{Gender, Movie, User, WatchedEntry};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to a Flick backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the backend (e.g., "https://movies.example.com")
    pub url: String,
}

impl ServerConfig {
    /// Create a new server config with the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration payload: full profile plus credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Profile-update payload (credentials are not editable here).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub email: String,
}

/// Outcome of an operation the backend answers with an in-band `success`
/// flag: login, registration, and profile update.
///
/// `Rejected` is the expected business-failure channel (bad credentials,
/// duplicate username, validation); transport and server faults stay in
/// [`crate::ServerClientError`].
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// The operation succeeded; the server echoed the fresh user snapshot.
    Granted(User),
    /// The operation was rejected by a business rule.
    Rejected {
        /// Optional human-readable reason from the backend.
        message: Option<String>,
    },
}

impl AuthOutcome {
    /// The granted user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthOutcome::Granted(user) => Some(user),
            AuthOutcome::Rejected { .. } => None,
        }
    }
}

fn success_default() -> bool {
    // The backend only spells the flag out when it is false.
    true
}

/// Wire shape shared by login/register/profile responses.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponseWire {
    #[serde(default = "success_default")]
    pub success: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl AuthResponseWire {
    pub(crate) fn into_outcome(self) -> crate::Result<AuthOutcome> {
        if !self.success {
            return Ok(AuthOutcome::Rejected {
                message: self.error,
            });
        }
        match self.user {
            Some(user) => Ok(AuthOutcome::Granted(user)),
            None => Err(crate::ServerClientError::ParseError(
                "success response is missing the user payload".to_string(),
            )),
        }
    }
}

/// Response from the session check performed at app entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionCheck {
    /// Whether the request carried a live session cookie.
    pub authenticated: bool,
    /// The session's user, present when `authenticated` is true.
    pub user: Option<User>,
}

// =============================================================================
// My-List Types
// =============================================================================

/// Mutation responses echo the refreshed user record.
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MyListResponse {
    pub movies_in_my_list: Vec<Movie>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MyListIdsResponse {
    pub mylist: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InListResponse {
    pub is_in_list: bool,
}

// =============================================================================
// Watched-List Types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WatchedTimeRequest {
    pub watched_time: f64,
}

/// The original client echoes the movie id in the body as well as the
/// path; the backend accepts either, so the shape is preserved.
#[derive(Debug, Serialize)]
pub(crate) struct RemoveWatchedRequest {
    #[serde(rename = "movieID")]
    pub movie_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WatchedMoviesResponse {
    pub watched_movies: Vec<WatchedEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WatchtimeResponse {
    #[serde(default)]
    pub watchtime: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InWatchedResponse {
    pub is_in_watched_movies: bool,
}
