//! Playback-screen coordinator.
//!
//! Playback is a placeholder: every movie streams the same static sample
//! source. The coordinator still resumes from the recorded watchtime and
//! keeps the local transport state (pause/mute/seek) that the controls
//! bind to.

use std::sync::Arc;

use flick_core::format_playback_position;
use tracing::warn;

use crate::api::ServerApi;

/// Static sample source played for every movie.
pub const PLACEHOLDER_STREAM_URL: &str =
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Seek step for the forward/backward controls, in seconds.
const SEEK_STEP: f64 = 10.0;

/// Playback coordinator for one movie.
pub struct PlayerScreen {
    api: Arc<dyn ServerApi>,
    movie_id: String,
    /// Title shown in the player chrome.
    pub title: String,
    /// Current playback position in seconds.
    pub position: f64,
    pub paused: bool,
    pub muted: bool,
}

impl PlayerScreen {
    pub fn new(api: Arc<dyn ServerApi>, movie_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            api,
            movie_id: movie_id.into(),
            title: title.into(),
            position: 0.0,
            paused: false,
            muted: false,
        }
    }

    /// The source to hand to the video view.
    pub fn stream_url(&self) -> &'static str {
        PLACEHOLDER_STREAM_URL
    }

    /// Resume from the recorded watchtime; start at zero when there is
    /// none or the fetch fails.
    pub async fn load(&mut self) {
        match self.api.watchtime(&self.movie_id).await {
            Ok(watchtime) => self.position = watchtime.max(0.0),
            Err(e) => {
                warn!(movie_id = %self.movie_id, error = %e, "Watchtime fetch failed");
                self.position = 0.0;
            }
        }
    }

    pub fn play(&mut self) {
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn mute(&mut self) {
        self.muted = true;
    }

    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Jump forward by the seek step.
    pub fn seek_forward(&mut self) {
        self.position += SEEK_STEP;
    }

    /// Jump back by the seek step, clamped at the start.
    pub fn seek_backward(&mut self) {
        self.position = (self.position - SEEK_STEP).max(0.0);
    }

    /// Clock label for the current position.
    pub fn position_label(&self) -> String {
        format_playback_position(self.position)
    }
}
