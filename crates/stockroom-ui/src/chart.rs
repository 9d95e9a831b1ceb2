//! Stacked area chart of stock and sales, rendered as inline SVG.
//!
//! Stock is drawn first from the zero line, sales is stacked on top of it.
//! Curves use monotone-X cubic interpolation so they never overshoot the
//! data between two periods.

use std::fmt::Write as _;

use stockroom_core::TrendPoint;

use crate::html::escape;

pub const STOCK_STROKE: &str = "#6366f1";
pub const STOCK_FILL: &str = "#818cf8";
pub const SALES_STROKE: &str = "#10b981";
pub const SALES_FILL: &str = "#34d399";
pub const GRID_STROKE: &str = "#e5e7eb";
pub const FILL_OPACITY: f64 = 0.2;
const CURSOR_STROKE: &str = "#cccccc";

const TOOLTIP_WIDTH: f64 = 120.0;
const TOOLTIP_HEIGHT: f64 = 64.0;

/// Canvas size and plot margins in SVG user units.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    /// Room left of the plot for Y tick labels.
    pub y_axis_width: f64,
    /// Room below the plot for X tick labels.
    pub x_axis_height: f64,
    /// Number of Y ticks, including zero.
    pub tick_count: usize,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 320.0,
            margin_top: 5.0,
            margin_right: 5.0,
            margin_bottom: 5.0,
            margin_left: 5.0,
            y_axis_width: 60.0,
            x_axis_height: 30.0,
            tick_count: 5,
        }
    }
}

impl ChartGeometry {
    fn plot_left(&self) -> f64 {
        self.margin_left + self.y_axis_width
    }

    fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    fn plot_top(&self) -> f64 {
        self.margin_top
    }

    fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom - self.x_axis_height
    }
}

/// Renders trend points as a stacked area chart.
#[derive(Debug, Clone, Default)]
pub struct AreaChart {
    geometry: ChartGeometry,
}

impl AreaChart {
    pub fn new(geometry: ChartGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    /// Render the chart. Points are drawn in the order given.
    pub fn render(&self, points: &[TrendPoint]) -> String {
        let g = &self.geometry;
        let max = points
            .iter()
            .map(TrendPoint::stacked_total)
            .max()
            .unwrap_or(0) as f64;
        let ticks = nice_ticks(max, g.tick_count);
        let top = ticks.last().copied().unwrap_or(1.0).max(f64::MIN_POSITIVE);

        let scale_y = |v: f64| g.plot_bottom() - v / top * (g.plot_bottom() - g.plot_top());
        let xs = x_positions(points.len(), g.plot_left(), g.plot_right());

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg class="area-chart" viewBox="0 0 {w} {h}" role="img" aria-label="Stock and sales by period">"#,
            w = fmt_num(g.width),
            h = fmt_num(g.height),
        );

        // Horizontal dashed grid, no vertical lines.
        svg.push_str(r#"<g class="chart-grid">"#);
        for tick in &ticks {
            let y = fmt_num(scale_y(*tick));
            let _ = write!(
                svg,
                r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{GRID_STROKE}" stroke-dasharray="3 3"/>"#,
                x1 = fmt_num(g.plot_left()),
                x2 = fmt_num(g.plot_right()),
            );
        }
        svg.push_str("</g>");

        // Tick labels only; the axes draw no lines and no tick marks.
        svg.push_str(r#"<g class="chart-axis chart-axis-y">"#);
        for tick in &ticks {
            let _ = write!(
                svg,
                r#"<text class="chart-tick" x="{x}" y="{y}" text-anchor="end" dominant-baseline="middle">{label}</text>"#,
                x = fmt_num(g.plot_left() - 8.0),
                y = fmt_num(scale_y(*tick)),
                label = fmt_num(*tick),
            );
        }
        svg.push_str("</g>");

        svg.push_str(r#"<g class="chart-axis chart-axis-x">"#);
        for (point, x) in points.iter().zip(&xs) {
            let _ = write!(
                svg,
                r#"<text class="chart-tick" x="{x}" y="{y}" text-anchor="middle">{label}</text>"#,
                x = fmt_num(*x),
                y = fmt_num(g.plot_bottom() + 20.0),
                label = escape(&point.period),
            );
        }
        svg.push_str("</g>");

        if !points.is_empty() {
            let zero = scale_y(0.0);
            let stock_line: Vec<(f64, f64)> = points
                .iter()
                .zip(&xs)
                .map(|(p, x)| (*x, scale_y(f64::from(p.stock))))
                .collect();
            let total_line: Vec<(f64, f64)> = points
                .iter()
                .zip(&xs)
                .map(|(p, x)| (*x, scale_y(p.stacked_total() as f64)))
                .collect();
            let floor: Vec<(f64, f64)> = xs.iter().map(|x| (*x, zero)).collect();

            // A lone point is stretched across the plot as a flat band.
            let span = |line: &[(f64, f64)]| -> Vec<(f64, f64)> {
                if line.len() == 1 {
                    vec![(g.plot_left(), line[0].1), (g.plot_right(), line[0].1)]
                } else {
                    line.to_vec()
                }
            };
            let (stock_line, total_line, floor) =
                (span(&stock_line), span(&total_line), span(&floor));

            svg.push_str(&series("stock", &stock_line, &floor, STOCK_STROKE, STOCK_FILL));
            svg.push_str(&series("sales", &total_line, &stock_line, SALES_STROKE, SALES_FILL));

            svg.push_str(&self.hover_zones(points, &xs, &scale_y));
        }

        svg.push_str("</svg>");
        svg
    }

    fn hover_zones(&self, points: &[TrendPoint], xs: &[f64], scale_y: &dyn Fn(f64) -> f64) -> String {
        let g = &self.geometry;
        let mut out = String::from(r#"<g class="chart-hover-layer">"#);

        for (i, (point, x)) in points.iter().zip(xs).enumerate() {
            let left = if i == 0 { g.plot_left() } else { (xs[i - 1] + x) / 2.0 };
            let right = if i + 1 == xs.len() { g.plot_right() } else { (x + xs[i + 1]) / 2.0 };

            let tip_x = if x + 10.0 + TOOLTIP_WIDTH > g.width {
                x - 10.0 - TOOLTIP_WIDTH
            } else {
                x + 10.0
            };
            // Narrow canvases can push a flipped tooltip past the left edge.
            let tip_x = tip_x.min(g.width - TOOLTIP_WIDTH).max(0.0);
            let tip_y = g.plot_top() + 10.0;
            let period = escape(&point.period);

            let _ = write!(
                out,
                r#"<g class="chart-hover" data-period="{period}" data-stock="{stock}" data-sales="{sales}">"#,
                stock = point.stock,
                sales = point.sales,
            );
            let _ = write!(
                out,
                r#"<title>{period}: stock {stock}, sales {sales}</title>"#,
                stock = point.stock,
                sales = point.sales,
            );
            let _ = write!(
                out,
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="transparent"/>"#,
                x = fmt_num(left),
                y = fmt_num(g.plot_top()),
                w = fmt_num(right - left),
                h = fmt_num(g.plot_bottom() - g.plot_top()),
            );
            let _ = write!(
                out,
                r#"<line class="chart-cursor" x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{CURSOR_STROKE}"/>"#,
                x = fmt_num(*x),
                y1 = fmt_num(g.plot_top()),
                y2 = fmt_num(g.plot_bottom()),
            );
            let _ = write!(
                out,
                r#"<g class="chart-tooltip"><rect x="{tx}" y="{ty}" width="{tw}" height="{th}" rx="8"/><text x="{lx}" y="{l1}">{period}</text><text x="{lx}" y="{l2}" fill="{STOCK_STROKE}">stock : {stock}</text><text x="{lx}" y="{l3}" fill="{SALES_STROKE}">sales : {sales}</text><circle cx="{cx}" cy="{cy_stock}" r="4" fill="{STOCK_STROKE}"/><circle cx="{cx}" cy="{cy_total}" r="4" fill="{SALES_STROKE}"/></g>"#,
                tx = fmt_num(tip_x),
                ty = fmt_num(tip_y),
                tw = fmt_num(TOOLTIP_WIDTH),
                th = fmt_num(TOOLTIP_HEIGHT),
                lx = fmt_num(tip_x + 10.0),
                l1 = fmt_num(tip_y + 18.0),
                l2 = fmt_num(tip_y + 36.0),
                l3 = fmt_num(tip_y + 54.0),
                stock = point.stock,
                sales = point.sales,
                cx = fmt_num(*x),
                cy_stock = fmt_num(scale_y(f64::from(point.stock))),
                cy_total = fmt_num(scale_y(point.stacked_total() as f64)),
            );
            out.push_str("</g>");
        }

        out.push_str("</g>");
        out
    }
}

/// One stacked series: the filled band between `base` and `line`, plus the
/// stroke along `line`.
fn series(name: &str, line: &[(f64, f64)], base: &[(f64, f64)], stroke: &str, fill: &str) -> String {
    let mut area = monotone_path(line);
    if let Some((x, y)) = base.last() {
        let _ = write!(area, "L{},{}", fmt_num(*x), fmt_num(*y));
    }
    let reversed: Vec<(f64, f64)> = base.iter().rev().copied().collect();
    area.push_str(&monotone_segments(&reversed));
    area.push('Z');

    format!(
        r#"<g class="chart-series" data-series="{name}"><path class="chart-area" d="{area}" fill="{fill}" fill-opacity="{opacity}" stroke="none"/><path class="chart-line" d="{line}" fill="none" stroke="{stroke}" stroke-width="1"/></g>"#,
        opacity = FILL_OPACITY,
        line = monotone_path(line),
    )
}

/// X coordinate of each category, evenly spread with no outer padding.
/// A single category sits in the middle.
fn x_positions(n: usize, left: f64, right: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![(left + right) / 2.0],
        _ => {
            let step = (right - left) / (n - 1) as f64;
            (0..n).map(|i| left + step * i as f64).collect()
        }
    }
}

/// Y tick values from zero with a rounded step so that the last tick covers
/// `max`. Always returns `count.max(2)` values.
pub fn nice_ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(2);
    let step = if max > 0.0 {
        nice_step(max / (count - 1) as f64)
    } else {
        1.0
    };
    (0..count).map(|i| step * i as f64).collect()
}

/// Round a raw step up to the next 0.05 of its order of magnitude (0.1 when
/// the step is a single digit).
fn nice_step(rough: f64) -> f64 {
    let digits = rough.log10().floor() as i32 + 1;
    let magnitude = 10f64.powi(digits);
    let ratio = rough / magnitude;
    let divisions = if digits == 1 { 10.0 } else { 20.0 };
    let units = (ratio * divisions - 1e-9).ceil();
    units * magnitude / divisions
}

/// `M` command followed by the monotone cubic segments through `points`.
pub fn monotone_path(points: &[(f64, f64)]) -> String {
    match points.first() {
        Some((x, y)) => {
            let mut d = format!("M{},{}", fmt_num(*x), fmt_num(*y));
            d.push_str(&monotone_segments(points));
            d
        }
        None => String::new(),
    }
}

/// Segment commands (no leading move) through `points` in order. Works for
/// decreasing x as well, which is how area baselines are walked back.
fn monotone_segments(points: &[(f64, f64)]) -> String {
    let n = points.len();
    let mut d = String::new();
    match n {
        0 | 1 => {}
        2 => {
            let _ = write!(d, "L{},{}", fmt_num(points[1].0), fmt_num(points[1].1));
        }
        _ => {
            let tangents = monotone_tangents(points);
            for i in 0..n - 1 {
                let (x0, y0) = points[i];
                let (x1, y1) = points[i + 1];
                let dx = (x1 - x0) / 3.0;
                let _ = write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt_num(x0 + dx),
                    fmt_num(y0 + dx * tangents[i]),
                    fmt_num(x1 - dx),
                    fmt_num(y1 - dx * tangents[i + 1]),
                    fmt_num(x1),
                    fmt_num(y1),
                );
            }
        }
    }
    d
}

/// Tangent at each point. Interior tangents are zero at local extrema and
/// otherwise bounded by the neighbouring secant slopes; end tangents are
/// taken from the one-sided parabola.
fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let mut m = vec![0.0; n];
    for i in 1..n - 1 {
        m[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
    }
    m[0] = end_slope(points[0], points[1], m[1]);
    m[n - 1] = end_slope(points[n - 2], points[n - 1], m[n - 2]);
    m
}

fn interior_slope(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let sign = |v: f64| if v < 0.0 { -1.0 } else { 1.0 };
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if slope.is_finite() {
        slope
    } else {
        0.0
    }
}

fn end_slope(p0: (f64, f64), p1: (f64, f64), t: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h == 0.0 {
        t
    } else {
        (3.0 * (p1.1 - p0.1) / h - t) / 2.0
    }
}

/// Fixed-precision number without trailing zeros, so output is stable.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
