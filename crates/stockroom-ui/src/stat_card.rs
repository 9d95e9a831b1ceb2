//! Statistic card: one labeled metric with an accent-colored icon badge.

use stockroom_core::StatisticCardData;

use crate::html::escape;
use crate::icons;

/// Shown in place of an empty value.
pub const PLACEHOLDER_VALUE: &str = "--";

/// Render one statistic card.
///
/// The value is emitted exactly as given (escaped only). Blank values fall
/// back to [`PLACEHOLDER_VALUE`]; nothing here can fail.
pub fn render_stat_card(card: &StatisticCardData) -> String {
    let value = if card.value.trim().is_empty() {
        PLACEHOLDER_VALUE.to_string()
    } else {
        escape(&card.value)
    };

    format!(
        r#"<div class="card stat-card"><div><p class="stat-title">{title}</p><h3 class="stat-value">{value}</h3></div><div class="badge bg-{accent}">{icon}</div></div>"#,
        title = escape(&card.title),
        accent = card.accent.token(),
        icon = icons::glyph(card.icon, "icon-md"),
    )
}
