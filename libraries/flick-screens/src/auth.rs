//! Login and registration coordinators, plus the session bootstrap.

use std::sync::Arc;

use flick_core::{Gender, User};
use flick_server_client::{AuthOutcome, NewAccount};
use flick_session::SessionStore;
use tracing::{info, warn};

use crate::api::ServerApi;
use crate::notice::NoticeSlot;

/// Result of the one-shot session check at app entry.
#[derive(Debug)]
pub enum Bootstrap {
    /// A live session was found; the shell should skip the login form.
    Authenticated(User),
    /// No session; show the login form.
    LoginRequired,
}

/// Result of a login attempt.
#[derive(Debug)]
pub enum LoginFlow {
    /// Signed in; the snapshot is persisted and the shell can navigate.
    SignedIn(User),
    /// Rejected; the coordinator's `validation` field says why.
    Rejected,
}

/// Login-screen coordinator.
pub struct LoginScreen {
    api: Arc<dyn ServerApi>,
    session: Arc<SessionStore>,
    /// Inline validation message, shown until the user edits the form.
    pub validation: Option<String>,
    pub notice: NoticeSlot,
}

impl LoginScreen {
    pub fn new(api: Arc<dyn ServerApi>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            validation: None,
            notice: NoticeSlot::default(),
        }
    }

    /// One-shot session check at mount.
    ///
    /// When the cookie is still live, the returned snapshot is persisted
    /// and the login form is bypassed. This is not revalidated afterwards:
    /// screens trust the stored snapshot until the next explicit auth
    /// round-trip.
    pub async fn bootstrap(&mut self) -> Bootstrap {
        match self.api.check_session().await {
            Ok(check) if check.authenticated => match check.user {
                Some(user) => {
                    persist_snapshot(&self.session, &user).await;
                    info!(username = %user.username, "Session restored");
                    Bootstrap::Authenticated(user)
                }
                None => {
                    warn!("check-auth reported authenticated without a user");
                    Bootstrap::LoginRequired
                }
            },
            Ok(_) => Bootstrap::LoginRequired,
            Err(e) => {
                warn!(error = %e, "Session check failed");
                self.notice.post("Could not check your session");
                Bootstrap::LoginRequired
            }
        }
    }

    /// Attempt to sign in.
    pub async fn login(&mut self, username: &str, password: &str) -> LoginFlow {
        if username.trim().is_empty() || password.trim().is_empty() {
            self.validation = Some("Please fill all fields".to_string());
            return LoginFlow::Rejected;
        }
        self.validation = None;

        match self.api.login(username, password).await {
            Ok(AuthOutcome::Granted(user)) => {
                persist_snapshot(&self.session, &user).await;
                LoginFlow::SignedIn(user)
            }
            Ok(AuthOutcome::Rejected { message }) => {
                self.validation =
                    Some(message.unwrap_or_else(|| "Invalid username or password".to_string()));
                LoginFlow::Rejected
            }
            Err(e) => {
                warn!(error = %e, "Login request failed");
                self.notice.post("Could not reach the server");
                LoginFlow::Rejected
            }
        }
    }
}

/// Registration form as typed: free-text fields stay strings and are
/// parsed during validation, like the original text inputs.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegistrationForm {
    /// Validate and convert into the wire payload.
    fn validate(&self) -> Result<NewAccount, String> {
        let all_filled = !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.age.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.username.trim().is_empty()
            && !self.password.trim().is_empty();
        if !all_filled {
            return Err("Please fill all fields".to_string());
        }

        let age: u32 = self
            .age
            .trim()
            .parse()
            .map_err(|_| "Age must be a number".to_string())?;

        Ok(NewAccount {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            age,
            gender: self.gender.unwrap_or(Gender::Male),
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Result of a registration attempt.
#[derive(Debug)]
pub enum RegisterFlow {
    /// Account created; the shell returns to the login form.
    Registered(User),
    /// Rejected; see `validation`.
    Rejected,
}

/// Registration-screen coordinator.
pub struct RegisterScreen {
    api: Arc<dyn ServerApi>,
    session: Arc<SessionStore>,
    /// Inline validation message.
    pub validation: Option<String>,
    pub notice: NoticeSlot,
}

impl RegisterScreen {
    pub fn new(api: Arc<dyn ServerApi>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            validation: None,
            notice: NoticeSlot::default(),
        }
    }

    /// Attempt to create the account.
    pub async fn register(&mut self, form: &RegistrationForm) -> RegisterFlow {
        let account = match form.validate() {
            Ok(account) => account,
            Err(message) => {
                self.validation = Some(message);
                return RegisterFlow::Rejected;
            }
        };
        self.validation = None;

        match self.api.register(&account).await {
            Ok(AuthOutcome::Granted(user)) => {
                persist_snapshot(&self.session, &user).await;
                RegisterFlow::Registered(user)
            }
            Ok(AuthOutcome::Rejected { message }) => {
                self.validation =
                    Some(message.unwrap_or_else(|| "Registration failed".to_string()));
                RegisterFlow::Rejected
            }
            Err(e) => {
                warn!(error = %e, "Register request failed");
                self.notice.post("Could not reach the server");
                RegisterFlow::Rejected
            }
        }
    }
}

/// Best-effort snapshot write: a failed cache write must not fail a
/// successful sign-in, the next auth round-trip rewrites it anyway.
pub(crate) async fn persist_snapshot(session: &SessionStore, user: &User) {
    if let Err(e) = session.save_user(user).await {
        warn!(error = %e, "Failed to persist the user snapshot");
    }
}
