//! Overview page body: statistic cards, trend chart and activity feed.

use stockroom_core::{ActivityEntry, Icon, OverviewData};

use crate::chart::AreaChart;
use crate::html::escape;
use crate::icons;
use crate::stat_card::render_stat_card;

pub const CHART_TITLE: &str = "Inventory vs Sales Trends";
pub const ACTIVITY_TITLE: &str = "Recent Activity";

/// Render the overview body with the default chart geometry.
pub fn render_overview(data: &OverviewData) -> String {
    render_overview_with(data, &AreaChart::default())
}

/// Render the overview body with a custom chart.
pub fn render_overview_with(data: &OverviewData, chart: &AreaChart) -> String {
    let cards: String = data.stats.iter().map(render_stat_card).collect();
    let activity: String = data.activity.iter().map(activity_item).collect();

    format!(
        r#"<div class="overview">
<div class="stats-grid">{cards}</div>
<section class="card chart-panel"><h3 class="panel-title">{CHART_TITLE}</h3><div class="chart">{chart}</div></section>
<section class="card activity-panel"><h3 class="panel-title">{ACTIVITY_TITLE}</h3><div class="activity-list">{activity}</div></section>
</div>"#,
        chart = chart.render(&data.trend),
    )
}

fn activity_item(entry: &ActivityEntry) -> String {
    let sign = entry.delta_sign();
    format!(
        r#"<div class="activity-item"><div class="activity-main"><div class="activity-icon">{icon}</div><div><p class="activity-description">{description}</p><p class="activity-time">{time}</p></div></div><span class="delta text-{accent}" data-sign="{sign}">{delta}</span></div>"#,
        icon = icons::glyph(Icon::Package, ""),
        description = escape(&entry.description),
        time = escape(&entry.relative_time),
        accent = sign.accent().token(),
        sign = sign.as_str(),
        delta = escape(&entry.delta),
    )
}
