//! Icon identifier to inline SVG glyph mapping.
//!
//! Glyphs are 24x24 stroke outlines drawn in `currentColor`, so the
//! surrounding element decides their color.

use stockroom_core::Icon;

/// Stable kebab-case name of an icon, emitted as `data-icon`.
pub fn name(icon: Icon) -> &'static str {
    match icon {
        Icon::LayoutDashboard => "layout-dashboard",
        Icon::Package => "package",
        Icon::ShoppingCart => "shopping-cart",
        Icon::Users => "users",
        Icon::Settings => "settings",
        Icon::LogOut => "log-out",
        Icon::AlertTriangle => "alert-triangle",
        Icon::DollarSign => "dollar-sign",
        Icon::TrendingUp => "trending-up",
    }
}

fn shapes(icon: Icon) -> &'static str {
    match icon {
        Icon::LayoutDashboard => concat!(
            r#"<rect x="3" y="3" width="7" height="9" rx="1"/>"#,
            r#"<rect x="14" y="3" width="7" height="5" rx="1"/>"#,
            r#"<rect x="14" y="12" width="7" height="9" rx="1"/>"#,
            r#"<rect x="3" y="16" width="7" height="5" rx="1"/>"#,
        ),
        Icon::Package => concat!(
            r#"<path d="m7.5 4.27 9 5.15"/>"#,
            r#"<path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"/>"#,
            r#"<path d="m3.3 7 8.7 5 8.7-5"/>"#,
            r#"<path d="M12 22V12"/>"#,
        ),
        Icon::ShoppingCart => concat!(
            r#"<circle cx="8" cy="21" r="1"/>"#,
            r#"<circle cx="19" cy="21" r="1"/>"#,
            r#"<path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"/>"#,
        ),
        Icon::Users => concat!(
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>"#,
            r#"<circle cx="9" cy="7" r="4"/>"#,
            r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/>"#,
            r#"<path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        ),
        Icon::Settings => concat!(
            r#"<path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/>"#,
            r#"<circle cx="12" cy="12" r="3"/>"#,
        ),
        Icon::LogOut => concat!(
            r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>"#,
            r#"<polyline points="16 17 21 12 16 7"/>"#,
            r#"<line x1="21" y1="12" x2="9" y2="12"/>"#,
        ),
        Icon::AlertTriangle => concat!(
            r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/>"#,
            r#"<path d="M12 9v4"/>"#,
            r#"<path d="M12 17h.01"/>"#,
        ),
        Icon::DollarSign => concat!(
            r#"<line x1="12" y1="2" x2="12" y2="22"/>"#,
            r#"<path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>"#,
        ),
        Icon::TrendingUp => concat!(
            r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/>"#,
            r#"<polyline points="16 7 22 7 22 13"/>"#,
        ),
    }
}

/// Inline SVG for `icon`, with `class` appended to the base `icon` class.
pub fn glyph(icon: Icon, class: &str) -> String {
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {class}")
    };
    format!(
        r#"<svg class="{class}" data-icon="{name}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{shapes}</svg>"#,
        name = name(icon),
        shapes = shapes(icon),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 9] = [
        Icon::LayoutDashboard,
        Icon::Package,
        Icon::ShoppingCart,
        Icon::Users,
        Icon::Settings,
        Icon::LogOut,
        Icon::AlertTriangle,
        Icon::DollarSign,
        Icon::TrendingUp,
    ];

    #[test]
    fn every_icon_has_a_distinct_glyph() {
        let mut names: Vec<_> = ALL.iter().map(|i| name(*i)).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());

        for icon in ALL {
            let svg = glyph(icon, "");
            assert!(svg.starts_with("<svg class=\"icon\""));
            assert!(svg.ends_with("</svg>"));
            assert!(svg.contains(&format!("data-icon=\"{}\"", name(icon))));
        }
    }

    #[test]
    fn extra_class_is_appended() {
        let svg = glyph(Icon::Package, "icon-lg");
        assert!(svg.starts_with("<svg class=\"icon icon-lg\""));
    }
}
