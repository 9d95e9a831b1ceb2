//! CLI argument definitions for the Stockroom binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use stockroom_core::config::DEFAULT_PORT;

/// Stockroom - inventory overview dashboard.
#[derive(Parser, Debug)]
#[command(name = "stockroom", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// HTTP server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// JSON dataset replacing the built-in overview data.
    #[arg(short = 'd', long = "dataset")]
    pub dataset: Option<PathBuf>,

    /// Render the dashboard once to this file ("-" for stdout) and exit.
    #[arg(short = 'r', long = "render")]
    pub render: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > STOCKROOM_CONFIG env var > ~/.stockroom/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("STOCKROOM_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the HTTP server port.
    ///
    /// Priority: --port flag > STOCKROOM_PORT env var > config file value > default.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        self.resolve_port_with_env(config_port, std::env::var("STOCKROOM_PORT").ok())
    }

    fn resolve_port_with_env(&self, config_port: u16, env_port: Option<String>) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Some(p) = env_port.and_then(|v| v.parse::<u16>().ok()) {
            return p;
        }
        if config_port != 0 {
            return config_port;
        }
        DEFAULT_PORT
    }

    /// Resolve the dataset path.
    ///
    /// Priority: --dataset flag > config file value. `None` means the
    /// built-in data.
    pub fn resolve_dataset(&self, config_dataset: Option<&str>) -> Option<PathBuf> {
        self.dataset
            .clone()
            .or_else(|| config_dataset.map(PathBuf::from))
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".stockroom").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".stockroom").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("stockroom").chain(args.iter().copied()))
    }

    #[test]
    fn parses_all_flags() {
        let args = parse(&[
            "--config", "/etc/stockroom.toml",
            "--port", "8081",
            "--log-level", "debug",
            "--dataset", "data.json",
            "--render", "-",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/etc/stockroom.toml")));
        assert_eq!(args.port, Some(8081));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.dataset, Some(PathBuf::from("data.json")));
        assert_eq!(args.render, Some(PathBuf::from("-")));
    }

    #[test]
    fn explicit_config_path_wins() {
        let args = parse(&["-c", "custom.toml"]);
        assert_eq!(args.resolve_config_path(), PathBuf::from("custom.toml"));
    }

    #[test]
    fn port_precedence() {
        let flagged = parse(&["-p", "1111"]);
        assert_eq!(flagged.resolve_port_with_env(3333, Some("2222".into())), 1111);

        let bare = parse(&[]);
        assert_eq!(bare.resolve_port_with_env(3333, Some("2222".into())), 2222);
        assert_eq!(bare.resolve_port_with_env(3333, Some("junk".into())), 3333);
        assert_eq!(bare.resolve_port_with_env(3333, None), 3333);
        assert_eq!(bare.resolve_port_with_env(0, None), DEFAULT_PORT);
    }

    #[test]
    fn dataset_precedence() {
        let flagged = parse(&["--dataset", "cli.json"]);
        assert_eq!(
            flagged.resolve_dataset(Some("config.json")),
            Some(PathBuf::from("cli.json"))
        );

        let bare = parse(&[]);
        assert_eq!(
            bare.resolve_dataset(Some("config.json")),
            Some(PathBuf::from("config.json"))
        );
        assert_eq!(bare.resolve_dataset(None), None);
    }

    #[test]
    fn log_level_precedence() {
        assert_eq!(parse(&["-l", "trace"]).resolve_log_level("info"), "trace");
        assert_eq!(parse(&[]).resolve_log_level("warn"), "warn");
    }
}
