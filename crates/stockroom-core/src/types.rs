use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Symbolic icon identifier. The rendering layer resolves it to a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    LayoutDashboard,
    Package,
    ShoppingCart,
    Users,
    Settings,
    LogOut,
    AlertTriangle,
    DollarSign,
    TrendingUp,
}

/// Color token carrying status semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// Informational.
    Blue,
    /// Warning.
    Amber,
    /// Positive / success.
    Emerald,
    /// Brand and growth.
    Indigo,
    /// Destructive.
    Red,
    /// Neutral.
    Gray,
}

impl Accent {
    /// Token name used in CSS class suffixes.
    pub fn token(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Amber => "amber",
            Accent::Emerald => "emerald",
            Accent::Indigo => "indigo",
            Accent::Red => "red",
            Accent::Gray => "gray",
        }
    }

    /// Base color of the token.
    pub fn hex(&self) -> &'static str {
        match self {
            Accent::Blue => "#3b82f6",
            Accent::Amber => "#f59e0b",
            Accent::Emerald => "#10b981",
            Accent::Indigo => "#6366f1",
            Accent::Red => "#ef4444",
            Accent::Gray => "#6b7280",
        }
    }
}

/// Sign of a pre-formatted quantity delta such as `+50 units`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaSign {
    Positive,
    Negative,
    Neutral,
}

impl DeltaSign {
    /// Classify a delta by its first non-whitespace character.
    pub fn of(delta: &str) -> Self {
        match delta.trim_start().chars().next() {
            Some('+') => DeltaSign::Positive,
            Some('-') | Some('\u{2212}') => DeltaSign::Negative,
            _ => DeltaSign::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeltaSign::Positive => "positive",
            DeltaSign::Negative => "negative",
            DeltaSign::Neutral => "neutral",
        }
    }

    /// Accent used to style a delta with this sign.
    pub fn accent(&self) -> Accent {
        match self {
            DeltaSign::Positive => Accent::Emerald,
            DeltaSign::Negative => Accent::Red,
            DeltaSign::Neutral => Accent::Gray,
        }
    }
}

// =============================================================================
// Display records
// =============================================================================

/// One entry of the sidebar navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub label: String,
    pub icon: Icon,
    pub active: bool,
}

impl NavigationEntry {
    pub fn new(label: impl Into<String>, icon: Icon, active: bool) -> Self {
        Self {
            label: label.into(),
            icon,
            active,
        }
    }

    /// Lowercased, hyphen-separated label used as an action target.
    pub fn slug(&self) -> String {
        self.label
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Input of a single statistic card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticCardData {
    pub title: String,
    /// Pre-formatted value, rendered verbatim.
    pub value: String,
    pub icon: Icon,
    pub accent: Accent,
}

impl StatisticCardData {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        icon: Icon,
        accent: Accent,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            icon,
            accent,
        }
    }
}

/// One period of the sales/stock trend chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: String,
    pub sales: u32,
    pub stock: u32,
}

impl TrendPoint {
    pub fn new(period: impl Into<String>, sales: u32, stock: u32) -> Self {
        Self {
            period: period.into(),
            sales,
            stock,
        }
    }

    /// Height of the stacked column (stock below, sales on top).
    pub fn stacked_total(&self) -> u64 {
        u64::from(self.stock) + u64::from(self.sales)
    }
}

/// One line of the recent activity feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub description: String,
    pub relative_time: String,
    /// Signed quantity text, e.g. `+50 units`.
    pub delta: String,
}

impl ActivityEntry {
    pub fn new(
        description: impl Into<String>,
        relative_time: impl Into<String>,
        delta: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            relative_time: relative_time.into(),
            delta: delta.into(),
        }
    }

    pub fn delta_sign(&self) -> DeltaSign {
        DeltaSign::of(&self.delta)
    }
}

/// Everything the overview page body displays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewData {
    pub stats: Vec<StatisticCardData>,
    pub trend: Vec<TrendPoint>,
    pub activity: Vec<ActivityEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_sign_classification() {
        assert_eq!(DeltaSign::of("+50 units"), DeltaSign::Positive);
        assert_eq!(DeltaSign::of("  +1"), DeltaSign::Positive);
        assert_eq!(DeltaSign::of("-3 units"), DeltaSign::Negative);
        assert_eq!(DeltaSign::of("\u{2212}3 units"), DeltaSign::Negative);
        assert_eq!(DeltaSign::of("50 units"), DeltaSign::Neutral);
        assert_eq!(DeltaSign::of(""), DeltaSign::Neutral);
    }

    #[test]
    fn delta_sign_accents() {
        assert_eq!(DeltaSign::Positive.accent(), Accent::Emerald);
        assert_eq!(DeltaSign::Negative.accent(), Accent::Red);
        assert_eq!(DeltaSign::Neutral.accent(), Accent::Gray);
    }

    #[test]
    fn navigation_slug() {
        assert_eq!(
            NavigationEntry::new("Dashboard", Icon::LayoutDashboard, true).slug(),
            "dashboard"
        );
        assert_eq!(
            NavigationEntry::new("Stock Moves", Icon::Package, false).slug(),
            "stock-moves"
        );
    }

    #[test]
    fn stacked_total_does_not_overflow() {
        let point = TrendPoint::new("Jan", u32::MAX, u32::MAX);
        assert_eq!(point.stacked_total(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn icon_and_accent_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&Icon::AlertTriangle).unwrap(),
            "\"alert_triangle\""
        );
        assert_eq!(serde_json::to_string(&Accent::Emerald).unwrap(), "\"emerald\"");
        let icon: Icon = serde_json::from_str("\"layout_dashboard\"").unwrap();
        assert_eq!(icon, Icon::LayoutDashboard);
    }

    #[test]
    fn accent_tokens_are_distinct() {
        let all = [
            Accent::Blue,
            Accent::Amber,
            Accent::Emerald,
            Accent::Indigo,
            Accent::Red,
            Accent::Gray,
        ];
        let mut tokens: Vec<_> = all.iter().map(|a| a.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), all.len());

        let mut hexes: Vec<_> = all.iter().map(|a| a.hex()).collect();
        hexes.sort_unstable();
        hexes.dedup();
        assert_eq!(hexes.len(), all.len());
        assert!(all.iter().all(|a| a.hex().starts_with('#')));
    }
}
