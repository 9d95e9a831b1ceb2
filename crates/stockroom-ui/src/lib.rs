//! Stockroom UI crate - server-side rendering of the inventory dashboard.
//!
//! Every component is a pure function from display data to an HTML string.
//! The output is a single self-contained document: CSS is inlined, the chart
//! and icons are inline SVG, and nothing is fetched at runtime.
//!
//! # Modules
//!
//! - [`shell`]: sidebar navigation, header bar and scrollable content region
//! - [`overview`]: statistic cards, trend chart and recent activity feed
//! - [`stat_card`]: a single labeled metric
//! - [`chart`]: stacked area chart with monotone interpolation
//! - [`icons`]: icon identifier to glyph mapping
//! - [`document`]: `<!DOCTYPE html>` wrapper with the inline stylesheet
//!
//! # Usage
//!
//! ```rust,ignore
//! use stockroom_core::{config::DashboardConfig, StaticDataProvider};
//!
//! let html = stockroom_ui::render_dashboard(&DashboardConfig::default(), &StaticDataProvider)?;
//! ```

pub mod chart;
pub mod document;
pub mod html;
pub mod icons;
pub mod overview;
pub mod shell;
pub mod stat_card;
pub mod theme;

use stockroom_core::config::DashboardConfig;
use stockroom_core::{DataProvider, Result};

pub use chart::{AreaChart, ChartGeometry};
pub use overview::render_overview;
pub use shell::{render_shell, ShellContext};
pub use stat_card::render_stat_card;

/// Render the complete dashboard document from a data provider.
///
/// Only the provider can fail; rendering itself cannot.
pub fn render_dashboard(config: &DashboardConfig, provider: &dyn DataProvider) -> Result<String> {
    let navigation = provider.navigation();
    let data = provider.overview()?;

    let body = overview::render_overview(&data);
    let ctx = ShellContext {
        brand: &config.brand,
        page_title: &config.page_title,
        user_initial: &config.user_initial,
        navigation: &navigation,
    };
    let page = shell::render_shell(&ctx, &body);
    let html = document::render_document(&config.page_title, &config.brand, &page);

    tracing::debug!(
        bytes = html.len(),
        stats = data.stats.len(),
        trend_points = data.trend.len(),
        "Dashboard rendered"
    );
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{NavigationEntry, OverviewData, StaticDataProvider, StockroomError};

    struct FailingProvider;

    impl DataProvider for FailingProvider {
        fn navigation(&self) -> Vec<NavigationEntry> {
            Vec::new()
        }

        fn overview(&self) -> Result<OverviewData> {
            Err(StockroomError::Dataset("unavailable".to_string()))
        }
    }

    #[test]
    fn dashboard_is_complete_document() {
        let html = render_dashboard(&DashboardConfig::default(), &StaticDataProvider).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Dashboard - Inventory</title>"));
        assert!(html.contains("<aside class=\"sidebar\""));
        assert!(html.contains("<main class=\"content\"><div class=\"overview\">"));
        assert!(html.contains(overview::CHART_TITLE));
    }

    #[test]
    fn dashboard_render_is_idempotent() {
        let config = DashboardConfig::default();
        let first = render_dashboard(&config, &StaticDataProvider).unwrap();
        let second = render_dashboard(&config, &StaticDataProvider).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dashboard_uses_config_chrome() {
        let config = DashboardConfig {
            brand: "Depot".to_string(),
            page_title: "Stock".to_string(),
            user_initial: "Z".to_string(),
            dataset: None,
        };
        let html = render_dashboard(&config, &StaticDataProvider).unwrap();
        assert!(html.contains("<title>Stock - Depot</title>"));
        assert!(html.contains(">Z</div>"));
    }

    #[test]
    fn dashboard_has_no_external_urls() {
        let html = render_dashboard(&DashboardConfig::default(), &StaticDataProvider).unwrap();
        assert!(!html.contains("https://"));
        assert!(!html.contains("http://"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn provider_errors_propagate() {
        let err = render_dashboard(&DashboardConfig::default(), &FailingProvider).unwrap_err();
        assert!(matches!(err, StockroomError::Dataset(_)));
    }
}
