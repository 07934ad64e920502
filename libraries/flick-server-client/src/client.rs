//! Main Flick backend client.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::auth::AuthClient;
use crate::catalog::CatalogClient;
use crate::error::{Result, ServerClientError};
use crate::mylist::MyListClient;
use crate::profile::ProfileClient;
use crate::types::ServerConfig;
use crate::watched::WatchedClient;

/// Main client for the Flick backend.
///
/// Holds the shared HTTP handle (with the session cookie store) and hands
/// out per-resource sub-clients. The backend owns authentication: after a
/// successful login the session cookie rides along on every request.
///
/// # Example
///
/// ```ignore
/// let client = FlickServerClient::new(ServerConfig::new("http://localhost:3000"))?;
/// let outcome = client.auth().login("ana", "hunter2").await?;
/// let mylist = client.my_list().movies().await?;
/// ```
#[derive(Debug, Clone)]
pub struct FlickServerClient {
    http: Client,
    base_url: String,
}

impl FlickServerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .cookie_store(true)
            .user_agent(format!("Flick/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Catalog operations: browse, search, similar titles.
    pub fn catalog(&self) -> CatalogClient<'_> {
        CatalogClient::new(&self.http, &self.base_url)
    }

    /// My-list membership operations.
    pub fn my_list(&self) -> MyListClient<'_> {
        MyListClient::new(&self.http, &self.base_url)
    }

    /// Watched-list operations.
    pub fn watched(&self) -> WatchedClient<'_> {
        WatchedClient::new(&self.http, &self.base_url)
    }

    /// Authentication and session operations.
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.http, &self.base_url)
    }

    /// Profile operations.
    pub fn profile(&self) -> ProfileClient<'_> {
        ProfileClient::new(&self.http, &self.base_url)
    }
}

/// Map a reqwest send error, distinguishing "nobody is listening" from
/// other transport failures.
pub(crate) fn map_send_error(err: reqwest::Error) -> ServerClientError {
    if err.is_connect() || err.is_timeout() {
        ServerClientError::ServerUnreachable(err.to_string())
    } else {
        ServerClientError::Request(err)
    }
}

/// Triage a non-body response: 2xx passes through, 401 becomes
/// `AuthRequired`, anything else becomes `ServerError` with the body text
/// kept for diagnostics.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status.as_u16() == 401 {
        return Err(ServerClientError::AuthRequired);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ServerClientError::ServerError {
        status: status.as_u16(),
        message,
    })
}

/// Parse a 2xx response body, wrapping deserialization failures with the
/// operation name for the logs.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ServerClientError::ParseError(format!("Failed to parse {what}: {e}")))
}
