//! Persistent chrome around page content: sidebar, header bar and the
//! scrollable content region.

use stockroom_core::{Icon, NavigationEntry};

use crate::html::escape;
use crate::icons;

/// Everything the shell needs besides the embedded content.
#[derive(Debug, Clone, Copy)]
pub struct ShellContext<'a> {
    pub brand: &'a str,
    pub page_title: &'a str,
    pub user_initial: &'a str,
    pub navigation: &'a [NavigationEntry],
}

/// Render the shell with `content` embedded unchanged in the content region.
///
/// Navigation anchors and the logout button are inert in the markup; they
/// only carry `data-action` / `data-target` so a host can wire them to
/// its [`ShellActions`](stockroom_core::ShellActions).
pub fn render_shell(ctx: &ShellContext<'_>, content: &str) -> String {
    let nav: String = ctx.navigation.iter().map(nav_entry).collect();

    format!(
        r##"<div class="app">
<aside class="sidebar" aria-label="Sidebar">
<div class="sidebar-brand"><h1 class="brand">{brand_icon}{brand}</h1></div>
<nav class="nav" aria-label="Main">{nav}</nav>
<div class="sidebar-footer"><button type="button" class="logout" data-action="logout">{logout_icon}Logout</button></div>
</aside>
<div class="frame">
<header class="topbar"><h2 class="page-title">{title}</h2><div class="topbar-actions"><div class="avatar" aria-label="Current user">{initial}</div></div></header>
<main class="content">{content}</main>
</div>
</div>"##,
        brand_icon = icons::glyph(Icon::Package, "icon-lg"),
        brand = escape(ctx.brand),
        logout_icon = icons::glyph(Icon::LogOut, ""),
        title = escape(ctx.page_title),
        initial = escape(ctx.user_initial),
    )
}

fn nav_entry(entry: &NavigationEntry) -> String {
    let (class, current) = if entry.active {
        ("nav-entry nav-entry--active", r#" aria-current="page""#)
    } else {
        ("nav-entry", "")
    };
    format!(
        r##"<a href="#" class="{class}"{current} data-action="navigate" data-target="{target}">{icon}{label}</a>"##,
        target = escape(&entry.slug()),
        icon = icons::glyph(entry.icon, ""),
        label = escape(&entry.label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::provider::default_navigation;

    fn render(content: &str) -> String {
        let nav = default_navigation();
        let ctx = ShellContext {
            brand: "Inventory",
            page_title: "Dashboard",
            user_initial: "A",
            navigation: &nav,
        };
        render_shell(&ctx, content)
    }

    fn nav_labels(html: &str) -> Vec<String> {
        html.split("data-action=\"navigate\"")
            .skip(1)
            .map(|chunk| {
                let after_svg = &chunk[chunk.find("</svg>").unwrap() + "</svg>".len()..];
                after_svg[..after_svg.find("</a>").unwrap()].to_string()
            })
            .collect()
    }

    #[test]
    fn content_is_embedded_after_nav_and_header() {
        let html = render("X");
        let nav = html.find("<aside class=\"sidebar\"").unwrap();
        let header = html.find("<header class=\"topbar\">").unwrap();
        let main = html.find("<main class=\"content\">X</main>").unwrap();
        assert!(nav < header);
        assert!(header < main);
    }

    #[test]
    fn content_is_not_escaped_or_altered() {
        let html = render("<section id=\"body\">a &amp; b</section>");
        assert!(html.contains("<main class=\"content\"><section id=\"body\">a &amp; b</section></main>"));
    }

    #[test]
    fn five_entries_in_fixed_order() {
        assert_eq!(
            nav_labels(&render("")),
            vec!["Dashboard", "Products", "Orders", "Customers", "Settings"]
        );
    }

    #[test]
    fn exactly_one_active_entry() {
        let html = render("");
        assert_eq!(html.matches("nav-entry--active").count(), 1);
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        let active = html.find("nav-entry--active").unwrap();
        let target = &html[active..];
        assert!(target.contains("data-target=\"dashboard\""));
        assert!(target.find("data-target=\"dashboard\"").unwrap() < target.find("</a>").unwrap());
    }

    #[test]
    fn header_shows_title_and_initial() {
        let html = render("");
        assert!(html.contains("<h2 class=\"page-title\">Dashboard</h2>"));
        assert!(html.contains("<div class=\"avatar\" aria-label=\"Current user\">A</div>"));
        assert!(html.contains("Inventory</h1>"));
    }

    #[test]
    fn interactive_elements_are_inert_hooks() {
        let html = render("");
        assert_eq!(html.matches("href=\"#\"").count(), 5);
        assert!(html.contains("data-action=\"logout\""));
        assert!(!html.contains("onclick"));
    }
}
