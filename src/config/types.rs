//! Configuration types and compiled-in defaults.
//!
//! Every field carries a serde default so a partial (or absent) operator
//! document always deserializes into a complete configuration. The `Default`
//! impls here are the single source of truth for fallback values.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Pool identity and branding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolIdentity {
    /// Display name shown in the header and page titles.
    #[serde(default = "default_pool_name")]
    pub name: String,

    /// Short tagline shown under the pool name.
    #[serde(default = "default_pool_tagline")]
    pub tagline: String,

    /// Logo asset path or URL.
    #[serde(default = "default_pool_logo")]
    pub logo: String,

    /// Favicon asset path or URL.
    #[serde(default = "default_pool_favicon")]
    pub favicon: String,

    /// Text rendered in the page footer.
    #[serde(default = "default_footer_text")]
    pub footer_text: String,
}

impl Default for PoolIdentity {
    fn default() -> Self {
        Self {
            name: default_pool_name(),
            tagline: default_pool_tagline(),
            logo: default_pool_logo(),
            favicon: default_pool_favicon(),
            footer_text: default_footer_text(),
        }
    }
}

fn default_pool_name() -> String {
    "Community Mining Pool".to_string()
}

fn default_pool_tagline() -> String {
    "Mining for the community".to_string()
}

fn default_pool_logo() -> String {
    "/assets/logo.png".to_string()
}

fn default_pool_favicon() -> String {
    "/assets/favicon.ico".to_string()
}

fn default_footer_text() -> String {
    "Powered by MiningCore".to_string()
}

/// Per-coin settings, keyed by pool identifier (e.g. `monero1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CoinConfig {
    /// Human-readable coin name.
    #[serde(default)]
    pub display_name: String,

    /// Ticker symbol (e.g. `XMR`).
    #[serde(default)]
    pub ticker: String,

    /// Coin icon asset path or URL.
    #[serde(default)]
    pub icon: String,

    /// Accent color used for this coin's UI elements.
    #[serde(default)]
    pub color: String,

    /// Block explorer base URL.
    #[serde(default)]
    pub explorer_url: String,

    /// Mining algorithm label (e.g. `randomx`).
    #[serde(default)]
    pub algo: String,
}

/// Light/dark presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Dark background palette (default).
    #[default]
    Dark,
    /// Light background palette.
    Light,
}

impl ThemeMode {
    /// The document root class for this mode. Exactly one of the two classes
    /// is ever present.
    pub fn css_class(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark-mode",
            ThemeMode::Light => "light-mode",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Light => write!(f, "light"),
        }
    }
}

/// Visual theme: colors, fonts, shape and glow behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Light or dark mode.
    #[serde(default)]
    pub mode: ThemeMode,

    /// Primary accent color.
    #[serde(default = "default_primary_color")]
    pub primary_color: String,

    /// Secondary accent color.
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,

    /// Page background color.
    #[serde(default = "default_background")]
    pub background: String,

    /// Card/panel background color.
    #[serde(default = "default_card_background")]
    pub card_background: String,

    /// Main text color.
    #[serde(default = "default_text_color")]
    pub text_color: String,

    /// Dimmed/secondary text color.
    #[serde(default = "default_text_dim_color")]
    pub text_dim_color: String,

    /// Border color for cards and tables.
    #[serde(default = "default_border_color")]
    pub border_color: String,

    /// Success status color.
    #[serde(default = "default_success_color")]
    pub success_color: String,

    /// Warning status color.
    #[serde(default = "default_warning_color")]
    pub warning_color: String,

    /// Danger/error status color.
    #[serde(default = "default_danger_color")]
    pub danger_color: String,

    /// Font family for headings.
    #[serde(default = "default_font_heading")]
    pub font_heading: String,

    /// Font family for body text.
    #[serde(default = "default_font_body")]
    pub font_body: String,

    /// Border radius for cards and buttons (CSS length).
    #[serde(default = "default_border_radius")]
    pub border_radius: String,

    /// Whether glow effects are enabled.
    #[serde(default = "default_glow_effects")]
    pub glow_effects: bool,

    /// Glow color, applied only when `glow_effects` is true.
    #[serde(default = "default_glow_color")]
    pub glow_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            background: default_background(),
            card_background: default_card_background(),
            text_color: default_text_color(),
            text_dim_color: default_text_dim_color(),
            border_color: default_border_color(),
            success_color: default_success_color(),
            warning_color: default_warning_color(),
            danger_color: default_danger_color(),
            font_heading: default_font_heading(),
            font_body: default_font_body(),
            border_radius: default_border_radius(),
            glow_effects: default_glow_effects(),
            glow_color: default_glow_color(),
        }
    }
}

fn default_primary_color() -> String {
    "#8B5CF6".to_string()
}

fn default_secondary_color() -> String {
    "#06B6D4".to_string()
}

fn default_background() -> String {
    "#0B0B14".to_string()
}

fn default_card_background() -> String {
    "#12121F".to_string()
}

fn default_text_color() -> String {
    "#E2E8F0".to_string()
}

fn default_text_dim_color() -> String {
    "#64748B".to_string()
}

fn default_border_color() -> String {
    "#1E293B".to_string()
}

fn default_success_color() -> String {
    "#22C55E".to_string()
}

fn default_warning_color() -> String {
    "#F59E0B".to_string()
}

fn default_danger_color() -> String {
    "#EF4444".to_string()
}

fn default_font_heading() -> String {
    "Space Grotesk".to_string()
}

fn default_font_body() -> String {
    "Inter".to_string()
}

fn default_border_radius() -> String {
    "12px".to_string()
}

fn default_glow_effects() -> bool {
    true
}

fn default_glow_color() -> String {
    "#8B5CF680".to_string()
}

/// Which dashboard pages are enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageToggles {
    #[serde(default = "default_true")]
    pub home: bool,
    #[serde(default = "default_true")]
    pub miners: bool,
    #[serde(default = "default_true")]
    pub blocks: bool,
    #[serde(default = "default_true")]
    pub payments: bool,
    #[serde(default = "default_true")]
    pub getting_started: bool,
    #[serde(default)]
    pub goals: bool,
    #[serde(default)]
    pub leaderboard: bool,
}

impl Default for PageToggles {
    fn default() -> Self {
        Self {
            home: true,
            miners: true,
            blocks: true,
            payments: true,
            getting_started: true,
            goals: false,
            leaderboard: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Stratum connection details shown on the getting-started page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Pool hostname miners connect to.
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Stratum port for CPU miners.
    #[serde(default = "default_port_cpu")]
    pub stratum_port_cpu: u16,

    /// Stratum port for GPU miners.
    #[serde(default = "default_port_gpu")]
    pub stratum_port_gpu: u16,

    /// Stratum port for high-end GPU rigs.
    #[serde(default = "default_port_gpu_high")]
    pub stratum_port_gpu_high: u16,

    /// Server region label.
    #[serde(default = "default_region")]
    pub region: String,

    /// Whether SSL stratum endpoints are offered.
    #[serde(default)]
    pub ssl_enabled: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            stratum_port_cpu: default_port_cpu(),
            stratum_port_gpu: default_port_gpu(),
            stratum_port_gpu_high: default_port_gpu_high(),
            region: default_region(),
            ssl_enabled: false,
        }
    }
}

fn default_domain() -> String {
    "pool.example.com".to_string()
}

fn default_port_cpu() -> u16 {
    3333
}

fn default_port_gpu() -> u16 {
    3052
}

fn default_port_gpu_high() -> u16 {
    3152
}

fn default_region() -> String {
    "US-East".to_string()
}

/// How often a community goal resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPeriod {
    Monthly,
    Weekly,
    /// One-off goal, never resets (default).
    #[default]
    Once,
}

/// A single community funding goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GoalItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Target amount in XMR.
    #[serde(default)]
    pub target_xmr: f64,
    /// Donation wallet address for this goal.
    #[serde(default)]
    pub wallet_address: String,
    #[serde(default)]
    pub reset_period: ResetPeriod,
    /// Emoji or icon identifier shown next to the goal.
    #[serde(default)]
    pub icon: String,
}

/// Community goals section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GoalsConfig {
    #[serde(default)]
    pub enabled: bool,
    /// The operator's list replaces the default wholesale on merge.
    #[serde(default)]
    pub items: Vec<GoalItem>,
}

/// Visual style for block-found celebrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationStyle {
    Confetti,
    Fireworks,
    Flash,
    #[default]
    None,
}

/// Block-found celebration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrationsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub style: CelebrationStyle,
    #[serde(default)]
    pub sound: bool,
    /// Whether to name the miner who found the block.
    #[serde(default = "default_true")]
    pub show_finder: bool,
}

impl Default for CelebrationsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            style: CelebrationStyle::None,
            sound: false,
            show_finder: true,
        }
    }
}

/// Discord community integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DiscordConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Invite link shown in the footer when enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_url: Option<String>,

    /// Provider-specific extra keys pass through the merge untouched.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// The fully resolved pool configuration.
///
/// Every instance is complete: construction goes through serde defaults, so a
/// missing, empty or partial operator document still yields a value where each
/// field holds either the operator's setting or the compiled default. Once
/// resolved it is immutable and shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PoolConfig {
    #[serde(default)]
    pub pool: PoolIdentity,

    /// Coins keyed by pool identifier. BTreeMap keeps log lines and emitted
    /// CSS variables in a stable order.
    #[serde(default)]
    pub coins: BTreeMap<String, CoinConfig>,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub pages: PageToggles,

    #[serde(default)]
    pub connection: ConnectionConfig,

    #[serde(default)]
    pub goals: GoalsConfig,

    #[serde(default)]
    pub celebrations: CelebrationsConfig,

    #[serde(default)]
    pub discord: DiscordConfig,
}

impl PoolConfig {
    /// Look up a coin by its pool identifier (e.g. `monero1`).
    pub fn coin(&self, pool_id: &str) -> Option<&CoinConfig> {
        self.coins.get(pool_id)
    }

    /// Whether a named page is enabled. Unknown page names default to enabled,
    /// so new pages added by themes degrade gracefully.
    pub fn page_enabled(&self, page: &str) -> bool {
        match page {
            "home" => self.pages.home,
            "miners" => self.pages.miners,
            "blocks" => self.pages.blocks,
            "payments" => self.pages.payments,
            "getting_started" => self.pages.getting_started,
            "goals" => self.pages.goals,
            "leaderboard" => self.pages.leaderboard,
            _ => true,
        }
    }

    /// Configured coin identifiers in stable order.
    pub fn coin_ids(&self) -> Vec<&str> {
        self.coins.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_upstream_fallbacks() {
        let config = PoolConfig::default();
        assert_eq!(config.pool.name, "Community Mining Pool");
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.theme.background, "#0B0B14");
        assert_eq!(config.theme.border_radius, "12px");
        assert!(config.theme.glow_effects);
        assert_eq!(config.connection.stratum_port_cpu, 3333);
        assert!(config.pages.home);
        assert!(!config.pages.goals);
        assert!(!config.pages.leaderboard);
        assert!(config.coins.is_empty());
        assert!(!config.goals.enabled);
        assert_eq!(config.celebrations.style, CelebrationStyle::None);
        assert!(config.celebrations.show_finder);
        assert!(!config.discord.enabled);
    }

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let config: PoolConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config, PoolConfig::default());
    }

    #[test]
    fn test_page_enabled_unknown_defaults_to_true() {
        let config = PoolConfig::default();
        assert!(config.page_enabled("home"));
        assert!(!config.page_enabled("goals"));
        assert!(config.page_enabled("some_future_page"));
    }

    #[test]
    fn test_coin_lookup() {
        let mut config = PoolConfig::default();
        config.coins.insert(
            "monero1".to_string(),
            CoinConfig {
                display_name: "Monero".to_string(),
                ticker: "XMR".to_string(),
                color: "#FF6600".to_string(),
                ..CoinConfig::default()
            },
        );
        assert_eq!(config.coin("monero1").unwrap().ticker, "XMR");
        assert!(config.coin("tari1").is_none());
    }

    #[test]
    fn test_theme_mode_round_trip() {
        let light: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(light, ThemeMode::Light);
        assert_eq!(light.css_class(), "light-mode");
        assert_eq!(ThemeMode::Dark.css_class(), "dark-mode");
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn test_discord_extra_keys_survive() {
        let config: DiscordConfig = serde_json::from_value(serde_json::json!({
            "enabled": true,
            "invite_url": "https://discord.gg/pool",
            "webhook_url": "https://discord.com/api/webhooks/1"
        }))
        .unwrap();
        assert!(config.enabled);
        assert_eq!(config.invite_url.as_deref(), Some("https://discord.gg/pool"));
        assert_eq!(
            config.extra.get("webhook_url").and_then(|v| v.as_str()),
            Some("https://discord.com/api/webhooks/1")
        );
    }
}
