//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};

use stockroom_core::{DataProvider, ShellActions, StockroomConfig, TracingActions};

/// Shared application state.
///
/// Everything is read-only after startup, so plain `Arc`s suffice.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<StockroomConfig>,
    /// Source of the dashboard data.
    pub provider: Arc<dyn DataProvider>,
    /// Hooks behind the shell's navigation entries and logout control.
    pub actions: Arc<dyn ShellActions>,
    /// Monotonic start time for uptime calculation.
    pub start_time: Instant,
    /// Wall-clock start time reported by `/health`.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with the given provider and logging-only action hooks.
    pub fn new(config: StockroomConfig, provider: Arc<dyn DataProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
            actions: Arc::new(TracingActions),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Replace the action hooks.
    pub fn with_actions(mut self, actions: Arc<dyn ShellActions>) -> Self {
        self.actions = actions;
        self
    }
}
