pub mod actions;
pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use actions::{NoopActions, ShellActions, TracingActions};
pub use config::StockroomConfig;
pub use error::{Result, StockroomError};
pub use provider::{DataProvider, JsonDataProvider, StaticDataProvider};
pub use types::*;
