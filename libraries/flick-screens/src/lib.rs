//! Flick Screens
//!
//! Per-screen view-state coordinators: the logic between the presentation
//! layer and the backend accessors. Each coordinator fetches what its
//! screen needs, derives local state (membership flags, search results,
//! genre sections), and issues mutations that are reconciled against the
//! server's authoritative responses — local state is never left to drift
//! on an optimistic flip the server might have rejected.
//!
//! Presentation and navigation stay outside this crate: coordinators
//! expose plain state fields and outcome enums, and the shell decides what
//! to render or where to go.
//!
//! # Error channels
//!
//! Two distinct channels, never conflated:
//! - transport/unexpected failures surface as transient notices
//!   ([`NoticeSlot`], dismissible, auto-expiring in the UI);
//! - expected business rejections (bad credentials, duplicate username)
//!   land in a coordinator's persistent `validation` field for inline
//!   display until corrected.
//!
//! No failure panics a screen; every coordinator stays usable after any
//! single failed call.
//!
//! There is no request cancellation: dropping a coordinator (or the future
//! driving one of its methods) before a fetch completes simply never
//! applies the result. In-flight network calls finish on their own.

mod activation;
mod api;
mod auth;
mod details;
mod home;
mod notice;
mod player;
mod profile;
mod search;
mod watched;

pub use activation::Activate;
pub use api::ServerApi;
pub use auth::{Bootstrap, LoginFlow, LoginScreen, RegisterFlow, RegisterScreen, RegistrationForm};
pub use details::MovieDetailsScreen;
pub use home::{GenreSection, HomeScreen};
pub use notice::NoticeSlot;
pub use player::{PlayerScreen, PLACEHOLDER_STREAM_URL};
pub use profile::{EditAccountScreen, ProfileFlow, ProfileForm, ProfileScreen};
pub use search::SearchScreen;
pub use watched::WatchedScreen;
