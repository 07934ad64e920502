//! Domain types shared across the Flick workspace.

mod genre;
mod movie;
mod user;
mod watched;

pub use genre::Genre;
pub use movie::Movie;
pub use user::{Gender, User};
pub use watched::WatchedEntry;
