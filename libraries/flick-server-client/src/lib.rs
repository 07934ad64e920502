//! Flick Server Client
//!
//! HTTP client library for the Flick backend API.
//!
//! # Features
//!
//! - **Catalog**: browse all movies, filter by genre, search, related titles
//! - **My list**: membership mutations reconciled from server echoes
//! - **Watched list**: mark/unmark with playback position tracking
//! - **Auth & profile**: cookie-session login, registration, profile updates
//!
//! The backend authenticates with a session cookie; the client's reqwest
//! cookie store carries it automatically, so none of the accessors take
//! credentials beyond the initial login.
//!
//! # Example
//!
//! ```ignore
//! use flick_server_client::{FlickServerClient, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::new("https://movies.example.com");
//!     let client = FlickServerClient::new(config)?;
//!
//!     let movies = client.catalog().list_movies(None).await?;
//!     println!("{} movies in the catalog", movies.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod catalog;
mod client;
mod error;
mod mylist;
mod profile;
mod types;
mod watched;

// Re-export main types
pub use client::FlickServerClient;
pub use error::{Result, ServerClientError};
pub use types::{AuthOutcome, NewAccount, ProfileUpdate, ServerConfig, SessionCheck};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use catalog::CatalogClient;
pub use mylist::MyListClient;
pub use profile::ProfileClient;
pub use watched::WatchedClient;
