//! Idempotent Google Fonts stylesheet requests.
//!
//! Operators pick fonts in `pool.config.yml`; the registry turns the chosen
//! families into at most one combined stylesheet URL each, and never requests
//! the same family twice in a process. The URL is emitted as a `<link>` for
//! the browser, so an unreachable font service costs nothing but the custom
//! glyphs.

use std::collections::BTreeSet;

/// Base URL of the font-hosting service.
pub const FONT_SERVICE_BASE: &str = "https://fonts.googleapis.com/css2";

/// Weight axis requested for every family.
const FONT_WEIGHTS: &str = "wght@300;400;500;600;700";

/// Append-only record of font families already requested this process.
#[derive(Debug, Default)]
pub struct FontRegistry {
    requested: BTreeSet<String>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the given families and build one combined stylesheet URL for
    /// those not yet requested.
    ///
    /// Families already in the registry are skipped silently; duplicates
    /// within a single call count once. Returns `None` when every family has
    /// already been requested, meaning no network action at all.
    pub fn ensure_loaded<I, S>(&mut self, families: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fresh: Vec<String> = Vec::new();
        for family in families {
            let family = family.as_ref().trim();
            if family.is_empty() || self.requested.contains(family) {
                continue;
            }
            self.requested.insert(family.to_string());
            fresh.push(family.to_string());
        }

        if fresh.is_empty() {
            return None;
        }

        let query = fresh
            .iter()
            .map(|f| format!("family={}:{}", f.replace(' ', "+"), FONT_WEIGHTS))
            .collect::<Vec<_>>()
            .join("&");

        Some(format!("{FONT_SERVICE_BASE}?{query}&display=swap"))
    }

    /// Families requested so far, in stable order.
    pub fn requested(&self) -> impl Iterator<Item = &str> {
        self.requested.iter().map(String::as_str)
    }

    /// Number of distinct families ever requested.
    pub fn len(&self) -> usize {
        self.requested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_calls_request_each_family_once() {
        let mut registry = FontRegistry::new();

        let first = registry.ensure_loaded(["Inter", "Inter", "Roboto"]);
        let url = first.unwrap();
        assert!(url.contains("family=Inter:wght@300;400;500;600;700"));
        assert!(url.contains("family=Roboto:"));
        assert_eq!(url.matches("family=").count(), 2);

        let second = registry.ensure_loaded(["Inter", "Inter", "Roboto"]);
        assert!(second.is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_spaces_encoded_as_plus() {
        let mut registry = FontRegistry::new();
        let url = registry.ensure_loaded(["Space Grotesk"]).unwrap();
        assert!(url.contains("family=Space+Grotesk:"));
        assert!(url.starts_with(FONT_SERVICE_BASE));
        assert!(url.ends_with("&display=swap"));
    }

    #[test]
    fn test_only_new_families_appear_in_followup_url() {
        let mut registry = FontRegistry::new();
        registry.ensure_loaded(["Inter"]);

        let url = registry.ensure_loaded(["Inter", "JetBrains Mono"]).unwrap();
        assert!(url.contains("JetBrains+Mono"));
        assert!(!url.contains("family=Inter"));
    }

    #[test]
    fn test_empty_and_blank_names_ignored() {
        let mut registry = FontRegistry::new();
        assert!(registry.ensure_loaded(["", "  "]).is_none());
        assert!(registry.is_empty());
    }
}
