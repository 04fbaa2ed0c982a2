//! HTML templates for the dashboard.
//!
//! The page shell is embedded at compile time with `include_str!`; handlers
//! fill its `{{placeholder}}` slots per request.

use crate::config::PoolConfig;
use crate::theme::StyleRoot;

/// The shared page shell with header, navigation and footer.
pub const BASE_TEMPLATE: &str = include_str!("templates/base.html");

/// Navigation entries in display order: route, page key, label.
pub const NAV_PAGES: [(&str, &str, &str); 7] = [
    ("/", "home", "Home"),
    ("/miners", "miners", "Miners"),
    ("/blocks", "blocks", "Blocks"),
    ("/payments", "payments", "Payments"),
    ("/getting-started", "getting_started", "Getting Started"),
    ("/goals", "goals", "Goals"),
    ("/leaderboard", "leaderboard", "Leaderboard"),
];

/// Render the page shell around a content fragment.
///
/// Navigation only lists enabled pages; the mode class and font links come
/// from the projected theme so the page is themed before first paint.
pub fn render_page(config: &PoolConfig, theme: &StyleRoot, title: &str, content: &str) -> String {
    let nav = NAV_PAGES
        .iter()
        .filter(|(_, key, _)| config.page_enabled(key))
        .map(|(route, _, label)| format!(r#"        <a href="{route}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join("\n");

    let font_links = theme
        .stylesheets()
        .iter()
        .map(|href| format!(r#"    <link rel="stylesheet" href="{href}">"#))
        .collect::<Vec<_>>()
        .join("\n");

    BASE_TEMPLATE
        .replace("{{mode_class}}", theme.mode_class())
        .replace("{{title}}", &html_escape(title))
        .replace("{{pool_name}}", &html_escape(&config.pool.name))
        .replace("{{tagline}}", &html_escape(&config.pool.tagline))
        .replace("{{favicon}}", &html_escape(&config.pool.favicon))
        .replace("{{font_links}}", &font_links)
        .replace("{{nav}}", &nav)
        .replace("{{content}}", content)
        .replace("{{footer_text}}", &html_escape(&config.pool.footer_text))
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
