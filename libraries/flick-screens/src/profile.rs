//! Profile screens: viewing the snapshot, editing it, logging out.

use std::sync::Arc;

use flick_core::{Gender, User};
use flick_server_client::{AuthOutcome, ProfileUpdate};
use flick_session::SessionStore;
use tracing::warn;

use crate::api::ServerApi;
use crate::auth::persist_snapshot;
use crate::notice::NoticeSlot;
use crate::Activate;

/// Profile-detail coordinator.
///
/// Reads the locally persisted snapshot on every focus — profile edits
/// and logins elsewhere rewrite it, so no server round-trip is needed
/// here. Logout is the one mutation: end the server session, then drop
/// the snapshot.
pub struct ProfileScreen {
    api: Arc<dyn ServerApi>,
    session: Arc<SessionStore>,
    /// The displayed snapshot; `None` until a session exists.
    pub user: Option<User>,
    pub notice: NoticeSlot,
}

impl ProfileScreen {
    pub fn new(api: Arc<dyn ServerApi>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            user: None,
            notice: NoticeSlot::default(),
        }
    }

    /// Avatar URL for the header, with the default applied.
    pub fn avatar(&self) -> Option<&str> {
        self.user.as_ref().map(User::avatar_or_default)
    }

    /// End the session. Returns `true` when the shell should navigate
    /// back to the login screen.
    pub async fn logout(&mut self) -> bool {
        match self.api.logout().await {
            Ok(()) => {
                if let Err(e) = self.session.clear_user().await {
                    warn!(error = %e, "Failed to clear the user snapshot");
                }
                self.user = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "Logout failed");
                self.notice.post("Could not log out");
                false
            }
        }
    }
}

#[async_trait::async_trait]
impl Activate for ProfileScreen {
    async fn on_activate(&mut self) {
        self.user = self.session.load_user().await;
    }
}

/// Profile-edit form; free-text fields are parsed during validation.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub email: String,
}

impl ProfileForm {
    /// Pre-fill the form from the current snapshot.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            age: user.age.to_string(),
            gender: Some(user.gender),
            email: user.email.clone(),
        }
    }

    fn validate(&self) -> Result<ProfileUpdate, String> {
        let all_filled = !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.age.trim().is_empty()
            && !self.email.trim().is_empty();
        if !all_filled {
            return Err("Please fill all fields".to_string());
        }

        let age: u32 = self
            .age
            .trim()
            .parse()
            .map_err(|_| "Age must be a number".to_string())?;

        Ok(ProfileUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            age,
            gender: self.gender.unwrap_or(Gender::Male),
            email: self.email.trim().to_string(),
        })
    }
}

/// Result of a profile save.
#[derive(Debug)]
pub enum ProfileFlow {
    /// Saved; the snapshot is refreshed from the server's echo.
    Saved(User),
    /// Rejected; see `validation`.
    Rejected,
}

/// Profile-edit coordinator.
pub struct EditAccountScreen {
    api: Arc<dyn ServerApi>,
    session: Arc<SessionStore>,
    /// Inline validation message.
    pub validation: Option<String>,
    pub notice: NoticeSlot,
}

impl EditAccountScreen {
    pub fn new(api: Arc<dyn ServerApi>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            validation: None,
            notice: NoticeSlot::default(),
        }
    }

    /// Validate and save the edited profile.
    pub async fn save(&mut self, form: &ProfileForm) -> ProfileFlow {
        let update = match form.validate() {
            Ok(update) => update,
            Err(message) => {
                self.validation = Some(message);
                return ProfileFlow::Rejected;
            }
        };
        self.validation = None;

        match self.api.update_profile(&update).await {
            Ok(AuthOutcome::Granted(user)) => {
                persist_snapshot(&self.session, &user).await;
                ProfileFlow::Saved(user)
            }
            Ok(AuthOutcome::Rejected { message }) => {
                self.validation = Some(message.unwrap_or_else(|| "Update failed".to_string()));
                ProfileFlow::Rejected
            }
            Err(e) => {
                warn!(error = %e, "Profile update request failed");
                self.notice.post("Network or server error");
                ProfileFlow::Rejected
            }
        }
    }
}
