//! Inline stylesheet for the dashboard document.
//!
//! Breakpoints: medium at 768px (sidebar appears, stats grid goes to two
//! columns), wide at 1024px (stats grid goes to four columns). Accent
//! tokens map to `bg-*` and `text-*` classes.

/// The complete dashboard stylesheet, embedded in a `<style>` element.
pub const STYLESHEET: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; padding: 0; height: 100%; }
body {
  font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  font-size: 16px;
  line-height: 1.5;
}
h1, h2, h3, p { margin: 0; }
a { color: inherit; text-decoration: none; }
button { font: inherit; background: none; border: 0; cursor: pointer; }

.icon { width: 1.25rem; height: 1.25rem; flex-shrink: 0; }
.icon-md { width: 1.5rem; height: 1.5rem; }
.icon-lg { width: 2rem; height: 2rem; }

.app { display: flex; height: 100vh; background: #f9fafb; color: #111827; }

.sidebar {
  width: 16rem;
  background: #ffffff;
  border-right: 1px solid #e5e7eb;
  display: none;
  flex-direction: column;
}
.sidebar-brand { padding: 1.5rem; border-bottom: 1px solid #e5e7eb; }
.brand {
  display: flex; align-items: center; gap: 0.5rem;
  font-size: 1.5rem; font-weight: 700; color: #4f46e5;
}
.nav {
  flex: 1; padding: 1rem; overflow-y: auto;
  display: flex; flex-direction: column; gap: 0.5rem;
}
.nav-entry {
  display: flex; align-items: center; gap: 0.75rem;
  padding: 0.75rem 1rem; border-radius: 0.5rem;
  font-weight: 500; color: #4b5563;
  transition: background-color 150ms, color 150ms;
}
.nav-entry:hover { background: #f9fafb; color: #111827; }
.nav-entry--active, .nav-entry--active:hover { background: #eef2ff; color: #4338ca; }
.sidebar-footer { padding: 1rem; border-top: 1px solid #e5e7eb; }
.logout {
  display: flex; align-items: center; gap: 0.75rem; width: 100%;
  padding: 0.75rem 1rem; border-radius: 0.5rem; text-align: left;
  font-weight: 500; color: #dc2626;
  transition: background-color 150ms;
}
.logout:hover { background: #fef2f2; }

.frame { flex: 1; display: flex; flex-direction: column; overflow: hidden; }
.topbar {
  height: 4rem; background: #ffffff; border-bottom: 1px solid #e5e7eb;
  display: flex; align-items: center; justify-content: space-between;
  padding: 0 1.5rem;
}
.page-title { font-size: 1.25rem; font-weight: 600; color: #1f2937; }
.topbar-actions { display: flex; align-items: center; gap: 1rem; }
.avatar {
  width: 2rem; height: 2rem; border-radius: 9999px;
  background: #e0e7ff; color: #4f46e5; font-weight: 700;
  display: flex; align-items: center; justify-content: center;
}
.content { flex: 1; overflow-y: auto; padding: 1.5rem; }

.overview { display: flex; flex-direction: column; gap: 1.5rem; }
.stats-grid { display: grid; grid-template-columns: repeat(1, minmax(0, 1fr)); gap: 1.5rem; }
.card {
  background: #ffffff; padding: 1.5rem; border-radius: 0.75rem;
  border: 1px solid #f3f4f6; box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
}
.stat-card { display: flex; align-items: center; justify-content: space-between; }
.stat-title { font-size: 0.875rem; font-weight: 500; color: #6b7280; }
.stat-value { font-size: 1.5rem; font-weight: 700; color: #111827; margin-top: 0.25rem; }
.badge { padding: 0.75rem; border-radius: 9999px; color: #ffffff; display: flex; }
.panel-title { font-size: 1.125rem; font-weight: 600; color: #1f2937; margin-bottom: 1rem; }

.chart { height: 20rem; width: 100%; }
.chart svg { width: 100%; height: 100%; overflow: visible; }
.chart-tick { font-size: 12px; fill: #6b7280; }
.chart-cursor, .chart-tooltip { visibility: hidden; pointer-events: none; }
.chart-hover:hover .chart-cursor, .chart-hover:hover .chart-tooltip { visibility: visible; }
.chart-tooltip rect { fill: #ffffff; stroke: #e5e7eb; }
.chart-tooltip text { font-size: 12px; fill: #111827; }

.activity-list { display: flex; flex-direction: column; gap: 1rem; }
.activity-item {
  display: flex; align-items: center; justify-content: space-between;
  padding: 0.75rem 0; border-bottom: 1px solid #f3f4f6;
}
.activity-item:last-child { border-bottom: 0; }
.activity-main { display: flex; align-items: center; gap: 0.75rem; }
.activity-icon {
  width: 2.5rem; height: 2.5rem; border-radius: 9999px;
  background: #f3f4f6; color: #6b7280;
  display: flex; align-items: center; justify-content: center;
}
.activity-description { font-size: 0.875rem; font-weight: 500; color: #111827; }
.activity-time { font-size: 0.75rem; color: #6b7280; }
.delta { font-size: 0.875rem; font-weight: 500; }

.bg-blue { background: #3b82f6; }
.bg-amber { background: #f59e0b; }
.bg-emerald { background: #10b981; }
.bg-indigo { background: #6366f1; }
.bg-red { background: #ef4444; }
.bg-gray { background: #6b7280; }
.text-blue { color: #2563eb; }
.text-amber { color: #d97706; }
.text-emerald { color: #059669; }
.text-indigo { color: #4f46e5; }
.text-red { color: #dc2626; }
.text-gray { color: #6b7280; }

@media (min-width: 768px) {
  .sidebar { display: flex; }
  .topbar { padding: 0 2rem; }
  .content { padding: 2rem; }
  .stats-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}
@media (min-width: 1024px) {
  .stats-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}
@media (prefers-reduced-motion: reduce) {
  .nav-entry, .logout { transition: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Accent;

    #[test]
    fn every_accent_token_has_classes() {
        for accent in [
            Accent::Blue,
            Accent::Amber,
            Accent::Emerald,
            Accent::Indigo,
            Accent::Red,
            Accent::Gray,
        ] {
            assert!(STYLESHEET.contains(&format!(".bg-{} {{ background: {}; }}", accent.token(), accent.hex())));
            assert!(STYLESHEET.contains(&format!(".text-{} ", accent.token())));
        }
    }

    #[test]
    fn breakpoints_are_present() {
        assert!(STYLESHEET.contains("@media (min-width: 768px)"));
        assert!(STYLESHEET.contains("@media (min-width: 1024px)"));
        assert!(STYLESHEET.contains("repeat(4, minmax(0, 1fr))"));
    }

    #[test]
    fn no_external_urls() {
        assert!(!STYLESHEET.contains("http"));
        assert!(!STYLESHEET.contains("@import"));
    }
}
