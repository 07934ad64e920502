//! Screen-activation hook.

use async_trait::async_trait;

/// Explicit "screen regained focus" subscription.
///
/// Screens that refresh state when navigated back to implement this and
/// the shell calls it on every focus event. This replaces the original
/// app's implicit focus-effect lifecycle coupling with a hook the caller
/// wires up deliberately.
#[async_trait]
pub trait Activate {
    /// Called each time the screen regains focus.
    async fn on_activate(&mut self);
}
