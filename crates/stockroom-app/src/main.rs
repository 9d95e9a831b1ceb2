//! Stockroom application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Pick the data provider (built-in data or a JSON dataset)
//! 3. Either render the dashboard once to a file, or start the axum server

mod cli;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use stockroom_api::routes;
use stockroom_api::state::AppState;
use stockroom_core::{
    DataProvider, JsonDataProvider, StaticDataProvider, StockroomConfig, StockroomError,
};

use crate::cli::CliArgs;

/// Read the config file, keeping the failure so it can be reported once
/// tracing is installed.
fn load_config(path: &Path) -> (StockroomConfig, Option<StockroomError>) {
    match StockroomConfig::load(path) {
        Ok(config) => (config, None),
        Err(e) => (StockroomConfig::default(), Some(e)),
    }
}

/// Log the outcome of [`load_config`]. A missing file is normal; anything
/// else means the file was ignored.
fn report_config(path: &Path, error: Option<&StockroomError>) {
    match error {
        None => tracing::info!(path = %path.display(), "Configuration loaded"),
        Some(StockroomError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No configuration file, using defaults")
        }
        Some(e) => tracing::warn!(
            path = %path.display(),
            error = %e,
            "Failed to load configuration, using defaults"
        ),
    }
}

/// Build the provider for the resolved dataset path.
fn build_provider(dataset: Option<&Path>) -> stockroom_core::Result<Arc<dyn DataProvider>> {
    match dataset {
        Some(path) => Ok(Arc::new(JsonDataProvider::load(path)?)),
        None => {
            tracing::info!("Using built-in dataset");
            Ok(Arc::new(StaticDataProvider))
        }
    }
}

/// Write a rendered document to `out`, or to stdout when `out` is `-`.
fn write_document(out: &Path, html: &str) -> std::io::Result<()> {
    if out == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        return stdout.flush();
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, html)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let (mut config, config_error) = load_config(&config_file);
    config.general.port = args.resolve_port(config.general.port);
    config.general.log_level = args.resolve_log_level(&config.general.log_level);

    // Tracing. Logs go to stderr so `--render -` keeps stdout clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting Stockroom v{}", env!("CARGO_PKG_VERSION"));
    report_config(&config_file, config_error.as_ref());

    // Provider.
    let dataset = args.resolve_dataset(config.dashboard.dataset.as_deref());
    let provider = match build_provider(dataset.as_deref()) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load dataset");
            return Err(e.into());
        }
    };

    // One-shot render.
    if let Some(out) = args.render.as_deref() {
        let html = stockroom_ui::render_dashboard(&config.dashboard, provider.as_ref())?;
        if let Err(e) = write_document(out, &html) {
            tracing::error!(path = %out.display(), error = %e, "Failed to write dashboard");
            return Err(e.into());
        }
        tracing::info!(path = %out.display(), bytes = html.len(), "Dashboard rendered");
        return Ok(());
    }

    // === API server ===

    let state = AppState::new(config.clone(), provider);
    tracing::info!(
        "Dashboard at http://{}:{}/",
        config.general.bind_address,
        config.general.port
    );

    if let Err(e) = routes::start_server(&config, state).await {
        tracing::error!(error = %e, "Server stopped");
        tracing::error!("Try: STOCKROOM_PORT={} stockroom", config.general.port.saturating_add(1));
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.text()
    }

    #[test]
    fn malformed_config_falls_back_and_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is {{ not toml").unwrap();

        let (config, error) = load_config(&path);
        assert_eq!(config.general.port, StockroomConfig::default().general.port);
        assert!(matches!(error, Some(StockroomError::Config(_))));

        let logs = with_captured_logs(|| report_config(&path, error.as_ref()));
        assert!(logs.contains(" WARN "));
        assert!(logs.contains("Failed to load configuration, using defaults"));
        assert!(!logs.contains("Configuration loaded"));
    }

    #[test]
    fn missing_config_is_not_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let (_, error) = load_config(&path);
        assert!(matches!(error, Some(StockroomError::Io(_))));

        let logs = with_captured_logs(|| report_config(&path, error.as_ref()));
        assert!(logs.contains("No configuration file, using defaults"));
        assert!(!logs.contains(" WARN "));
    }

    #[test]
    fn valid_config_is_reported_as_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\nport = 4000\n").unwrap();

        let (config, error) = load_config(&path);
        assert_eq!(config.general.port, 4000);
        assert!(error.is_none());

        let logs = with_captured_logs(|| report_config(&path, error.as_ref()));
        assert!(logs.contains("Configuration loaded"));
    }

    #[test]
    fn write_document_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("dashboard.html");
        write_document(&out, "<!DOCTYPE html>").unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "<!DOCTYPE html>");
    }

    #[test]
    fn build_provider_defaults_to_builtin_data() {
        let provider = build_provider(None).unwrap();
        assert_eq!(provider.overview().unwrap().trend.len(), 7);
    }

    #[test]
    fn build_provider_reports_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(build_provider(Some(&missing)).is_err());
    }

    #[test]
    fn render_with_json_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("data.json");
        std::fs::write(
            &dataset,
            r#"{"stats":[],"trend":[{"period":"W1","sales":10,"stock":20}],"activity":[]}"#,
        )
        .unwrap();

        let provider = build_provider(Some(&dataset)).unwrap();
        let html = stockroom_ui::render_dashboard(
            &StockroomConfig::default().dashboard,
            provider.as_ref(),
        )
        .unwrap();
        assert!(html.contains("data-period=\"W1\""));
    }
}
