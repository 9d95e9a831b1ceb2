//! Callback slots for the shell's interactive elements.
//!
//! Navigation anchors and the logout button carry no behavior of their own.
//! Whatever hosts the dashboard decides what they do by supplying a
//! [`ShellActions`] implementation.

use tracing::info;

use crate::types::NavigationEntry;

/// Hooks invoked by the shell's navigation entries and logout control.
///
/// Both hooks default to doing nothing.
pub trait ShellActions: Send + Sync {
    fn navigate(&self, _entry: &NavigationEntry) {}

    fn logout(&self) {}
}

/// Actions that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopActions;

impl ShellActions for NoopActions {}

/// Actions that only record the invocation in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActions;

impl ShellActions for TracingActions {
    fn navigate(&self, entry: &NavigationEntry) {
        info!(target = %entry.slug(), label = %entry.label, "Navigation requested");
    }

    fn logout(&self) {
        info!("Logout requested");
    }
}
