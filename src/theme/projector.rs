//! Theme projection: resolved configuration to presentation variables.
//!
//! The projector derives a flat set of style variables from the theme section
//! and writes them to a presentation target. It owns no global state: the
//! target and the font registry are passed in, and each invocation fully
//! overwrites any prior values, so projecting twice is the same as projecting
//! once.

use super::fonts::FontRegistry;
use crate::config::{CoinConfig, ThemeConfig, ThemeMode};
use std::collections::BTreeMap;

/// Sentinel glow value when glow effects are disabled.
const GLOW_DISABLED: &str = "transparent";

/// A surface the theme can be projected onto.
///
/// The production implementation is [`StyleRoot`], which the dashboard renders
/// to CSS. Tests may supply their own target.
pub trait PresentationTarget {
    /// Set a named style variable, replacing any prior value.
    fn set_variable(&mut self, name: &str, value: &str);

    /// Set the document-wide body font family.
    fn set_body_font(&mut self, family: &str);

    /// Classify the document root as dark or light. Exactly one of the two
    /// mode classes is present after this call.
    fn set_mode(&mut self, mode: ThemeMode);

    /// Attach an external stylesheet (font-service request).
    fn add_stylesheet(&mut self, href: &str);
}

/// The dashboard's style root: named variables, mode class, body font and
/// stylesheet links, rendered to CSS for the `:root` selector.
#[derive(Debug, Default)]
pub struct StyleRoot {
    variables: BTreeMap<String, String>,
    mode: ThemeMode,
    body_font: String,
    stylesheets: Vec<String>,
}

impl StyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a named variable, if set.
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// The single mode class currently on the document root.
    pub fn mode_class(&self) -> &'static str {
        self.mode.css_class()
    }

    pub fn body_font(&self) -> &str {
        &self.body_font
    }

    /// Stylesheet links attached so far, oldest first.
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Render the variables as a `:root` CSS block plus a body font rule.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.variables {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        if !self.body_font.is_empty() {
            css.push_str(&format!("body {{ font-family: {}; }}\n", self.body_font));
        }
        css
    }
}

impl PresentationTarget for StyleRoot {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    fn set_body_font(&mut self, family: &str) {
        self.body_font = family.to_string();
    }

    fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    fn add_stylesheet(&mut self, href: &str) {
        self.stylesheets.push(href.to_string());
    }
}

/// Project the theme and coin accents onto a presentation target.
///
/// Writes the fixed variable set derived from the theme, the computed glow
/// value, the font variables (plus the document body font so text renders
/// correctly before downstream rules apply), one accent variable per coin,
/// and the mutually exclusive mode class. New font families are requested
/// through the registry at most once per process.
pub fn project(
    theme: &ThemeConfig,
    coins: &BTreeMap<String, CoinConfig>,
    target: &mut dyn PresentationTarget,
    fonts: &mut FontRegistry,
) {
    // Core colors
    target.set_variable("--pool-bg", &theme.background);
    target.set_variable("--pool-card", &theme.card_background);
    target.set_variable("--pool-text", &theme.text_color);
    target.set_variable("--pool-text-dim", &theme.text_dim_color);
    target.set_variable("--pool-primary", &theme.primary_color);
    target.set_variable("--pool-secondary", &theme.secondary_color);
    target.set_variable("--pool-border", &theme.border_color);

    // Status colors
    target.set_variable("--pool-success", &theme.success_color);
    target.set_variable("--pool-warning", &theme.warning_color);
    target.set_variable("--pool-danger", &theme.danger_color);

    // Shape
    target.set_variable("--pool-radius", &theme.border_radius);

    // Glow
    if theme.glow_effects {
        target.set_variable("--pool-glow", &theme.glow_color);
    } else {
        target.set_variable("--pool-glow", GLOW_DISABLED);
    }

    // Typography
    let heading_stack = font_stack(&theme.font_heading);
    let body_stack = font_stack(&theme.font_body);
    target.set_variable("--pool-font-heading", &heading_stack);
    target.set_variable("--pool-font-body", &body_stack);
    target.set_body_font(&body_stack);

    if let Some(href) = fonts.ensure_loaded([theme.font_heading.as_str(), theme.font_body.as_str()])
    {
        target.add_stylesheet(&href);
    }

    // Coin accents, namespaced by pool identifier
    for (pool_id, coin) in coins {
        target.set_variable(&format!("--pool-coin-{pool_id}"), &coin.color);
    }

    target.set_mode(theme.mode);
}

/// CSS font-family stack for a configured family name.
fn font_stack(family: &str) -> String {
    format!("'{family}', sans-serif")
}
