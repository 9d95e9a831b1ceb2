//! Data providers feeding the dashboard.
//!
//! Rendering only ever sees [`OverviewData`] and navigation entries; where
//! they come from is decided here.

use std::path::Path;

use tracing::info;

use crate::error::{Result, StockroomError};
use crate::types::{
    Accent, ActivityEntry, Icon, NavigationEntry, OverviewData, StatisticCardData, TrendPoint,
};

/// Source of the data displayed by the dashboard.
pub trait DataProvider: Send + Sync {
    /// Sidebar entries in display order.
    fn navigation(&self) -> Vec<NavigationEntry>;

    /// Body dataset of the overview page.
    fn overview(&self) -> Result<OverviewData>;
}

/// The fixed sidebar entries. Dashboard is the active one.
pub fn default_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::new("Dashboard", Icon::LayoutDashboard, true),
        NavigationEntry::new("Products", Icon::Package, false),
        NavigationEntry::new("Orders", Icon::ShoppingCart, false),
        NavigationEntry::new("Customers", Icon::Users, false),
        NavigationEntry::new("Settings", Icon::Settings, false),
    ]
}

/// Built-in demo dataset.
///
/// The activity feed repeats the same entry three times; this is the demo
/// data as shipped, not a rendering artifact.
pub fn default_overview() -> OverviewData {
    let stats = vec![
        StatisticCardData::new("Total Inventory", "12,345", Icon::Package, Accent::Blue),
        StatisticCardData::new("Low Stock Items", "23", Icon::AlertTriangle, Accent::Amber),
        StatisticCardData::new("Total Revenue", "$54,230", Icon::DollarSign, Accent::Emerald),
        StatisticCardData::new("Growth", "+12.5%", Icon::TrendingUp, Accent::Indigo),
    ];

    let trend = vec![
        TrendPoint::new("Jan", 4000, 2400),
        TrendPoint::new("Feb", 3000, 1398),
        TrendPoint::new("Mar", 2000, 9800),
        TrendPoint::new("Apr", 2780, 3908),
        TrendPoint::new("May", 1890, 4800),
        TrendPoint::new("Jun", 2390, 3800),
        TrendPoint::new("Jul", 3490, 4300),
    ];

    let activity = (0..3)
        .map(|_| {
            ActivityEntry::new(
                "New stock added for \"Wireless Mouse\"",
                "2 hours ago",
                "+50 units",
            )
        })
        .collect();

    OverviewData {
        stats,
        trend,
        activity,
    }
}

/// Provider serving the built-in constant dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataProvider;

impl DataProvider for StaticDataProvider {
    fn navigation(&self) -> Vec<NavigationEntry> {
        default_navigation()
    }

    fn overview(&self) -> Result<OverviewData> {
        Ok(default_overview())
    }
}

/// Provider serving an overview dataset loaded from a JSON file.
///
/// The file is read once; navigation stays the built-in set.
#[derive(Debug, Clone)]
pub struct JsonDataProvider {
    data: OverviewData,
}

impl JsonDataProvider {
    pub fn new(data: OverviewData) -> Self {
        Self { data }
    }

    /// Load and parse a dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data: OverviewData = serde_json::from_str(&content).map_err(|e| {
            StockroomError::Dataset(format!("{}: {}", path.display(), e))
        })?;
        info!(
            path = %path.display(),
            stats = data.stats.len(),
            trend_points = data.trend.len(),
            activity = data.activity.len(),
            "Dataset loaded"
        );
        Ok(Self::new(data))
    }
}

impl DataProvider for JsonDataProvider {
    fn navigation(&self) -> Vec<NavigationEntry> {
        default_navigation()
    }

    fn overview(&self) -> Result<OverviewData> {
        Ok(self.data.clone())
    }
}
