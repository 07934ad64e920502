//! Transient-notice slot shared by the coordinators.

/// Holds the screen's pending transient notice (the snackbar channel).
///
/// Operational failures post here; the presentation layer takes the text,
/// shows it, and lets it expire. Business-rule rejections do NOT go
/// through this slot — they sit in a coordinator's `validation` field
/// until the user corrects the input.
#[derive(Debug, Default)]
pub struct NoticeSlot(Option<String>);

impl NoticeSlot {
    /// Replace the pending notice.
    pub fn post(&mut self, text: impl Into<String>) {
        self.0 = Some(text.into());
    }

    /// Take the pending notice, leaving the slot empty.
    pub fn take(&mut self) -> Option<String> {
        self.0.take()
    }

    /// Peek without consuming (mainly for tests).
    pub fn current(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
