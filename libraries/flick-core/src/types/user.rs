//! User domain type
use serde::{Deserialize, Serialize};

/// Avatar applied when the backend has none on record.
pub const DEFAULT_AVATAR: &str = "https://i.pravatar.cc/300";

/// User gender as the backend spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// `"Male"`
    Male,
    /// `"Female"`
    Female,
    /// `"Other"`
    Other,
}

/// User account snapshot.
///
/// The server is the sole source of truth; the client keeps a best-effort
/// copy in the session store, replaced on every mutating auth/profile call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,

    /// Login name, unique server-side.
    pub username: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Age in years.
    pub age: u32,

    /// Gender.
    pub gender: Gender,

    /// Contact email.
    pub email: String,

    /// Avatar URL; defaulted at read time when absent.
    pub avatar: Option<String>,

    /// Ids of the movies in this user's "my list" set.
    #[serde(default)]
    pub mylist: Vec<String>,
}

impl User {
    /// Avatar URL with the default applied when the backend has none.
    pub fn avatar_or_default(&self) -> &str {
        self.avatar.as_deref().unwrap_or(DEFAULT_AVATAR)
    }
}
