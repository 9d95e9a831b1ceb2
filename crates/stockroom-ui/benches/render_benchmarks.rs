use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stockroom_core::config::DashboardConfig;
use stockroom_core::provider::default_overview;
use stockroom_core::StaticDataProvider;
use stockroom_ui::{render_dashboard, AreaChart};

fn bench_full_dashboard(c: &mut Criterion) {
    let config = DashboardConfig::default();
    c.bench_function("render_dashboard", |b| {
        b.iter(|| render_dashboard(black_box(&config), &StaticDataProvider).unwrap())
    });
}

fn bench_chart(c: &mut Criterion) {
    let chart = AreaChart::default();
    let trend = default_overview().trend;
    c.bench_function("area_chart_7_points", |b| {
        b.iter(|| chart.render(black_box(&trend)))
    });
}

criterion_group!(benches, bench_full_dashboard, bench_chart);
criterion_main!(benches);
