use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, StockroomError};

/// Default HTTP port for the dashboard server.
pub const DEFAULT_PORT: u16 = 3040;

/// Top-level configuration for Stockroom.
///
/// Loaded from `~/.stockroom/config.toml` by default. Missing sections and
/// fields fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockroomConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl StockroomConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: StockroomConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| StockroomError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// Process-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Address the HTTP server binds to.
    pub bind_address: String,
    /// HTTP server port.
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            bind_address: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Dashboard chrome and data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Brand text in the sidebar header and document title.
    pub brand: String,
    /// Title shown in the header bar.
    pub page_title: String,
    /// Text inside the circular user badge.
    pub user_initial: String,
    /// Optional JSON dataset replacing the built-in overview data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand: "Inventory".to_string(),
            page_title: "Dashboard".to_string(),
            user_initial: "A".to_string(),
            dataset: None,
        }
    }
}
