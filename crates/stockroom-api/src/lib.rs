//! Stockroom API crate - axum HTTP server for the dashboard.
//!
//! Serves the rendered dashboard document, JSON views of the dataset it is
//! rendered from, a health check, and the endpoints behind the shell's
//! navigation and logout hooks.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
