//! HTTP server for the pool dashboard.
//!
//! Serves the configurable pages, the projected theme stylesheet and the
//! resolved-configuration API. Every handler awaits the configuration cache,
//! so nothing renders before resolution (and therefore theme projection) has
//! completed.

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json},
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::templates::{self, html_escape};
use crate::config::{ConfigCache, PoolConfig};
use crate::theme::StyleRoot;

/// Shared state for all dashboard handlers.
#[derive(Clone)]
pub struct DashboardServer {
    /// Single-flight configuration cache; handlers await it per request.
    cache: Arc<ConfigCache>,
    /// Theme projected once after resolution settled.
    theme: Arc<StyleRoot>,
    /// Port the server is listening on.
    port: u16,
}

impl DashboardServer {
    pub fn new(cache: Arc<ConfigCache>, theme: Arc<StyleRoot>, port: u16) -> Self {
        Self { cache, theme, port }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The resolved configuration, or 500 on cache infrastructure failure.
    async fn config(&self) -> Result<Arc<PoolConfig>, StatusCode> {
        self.cache
            .get()
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Health check response.
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Render a configurable page, or 404 when the operator has disabled it.
async fn render_gated(
    state: &DashboardServer,
    page: &str,
    title: &str,
    content: impl FnOnce(&PoolConfig) -> String,
) -> Result<Html<String>, StatusCode> {
    let config = state.config().await?;
    if !config.page_enabled(page) {
        return Err(StatusCode::NOT_FOUND);
    }
    let body = content(&config);
    Ok(Html(templates::render_page(
        &config,
        &state.theme,
        title,
        &body,
    )))
}

/// Home page content: the configured coins plus the community links.
fn home_content(config: &PoolConfig) -> String {
    let mut content = String::new();
    if config.coins.is_empty() {
        content.push_str(r#"<div class="card"><p class="dim">No coins configured yet.</p></div>"#);
    } else {
        for (pool_id, coin) in &config.coins {
            content.push_str(&format!(
                r#"<div class="card" style="border-left: 4px solid var(--pool-coin-{pool_id});">
    <h2>{name} <span class="dim">({ticker})</span></h2>
    <p class="dim">Algorithm: {algo}</p>
    <p><a href="{explorer}" style="color: var(--pool-secondary);">Block explorer</a></p>
</div>"#,
                pool_id = pool_id,
                name = html_escape(&coin.display_name),
                ticker = html_escape(&coin.ticker),
                algo = html_escape(&coin.algo),
                explorer = html_escape(&coin.explorer_url),
            ));
        }
    }
    if config.discord.enabled
        && let Some(ref invite) = config.discord.invite_url
    {
        content.push_str(&format!(
            r#"<div class="card"><p>Join the community on <a href="{invite}" style="color: var(--pool-primary);">Discord</a></p></div>"#,
            invite = html_escape(invite),
        ));
    }
    content
}

/// Home page: pool identity and the configured coins.
async fn home(State(state): State<DashboardServer>) -> Result<Html<String>, StatusCode> {
    render_gated(&state, "home", "Home", home_content).await
}

/// Miners page shell. Live hashrate data comes from the pool API on the
/// client side; the server only provides the themed frame.
async fn miners(State(state): State<DashboardServer>) -> Result<Html<String>, StatusCode> {
    render_gated(&state, "miners", "Miners", |_| {
        r#"<div class="card"><h2>Connected Miners</h2>
<div id="miners-table" class="dim">Loading miner statistics&hellip;</div></div>"#
            .to_string()
    })
    .await
}

/// Blocks page shell.
async fn blocks(State(state): State<DashboardServer>) -> Result<Html<String>, StatusCode> {
    render_gated(&state, "blocks", "Blocks", |_| {
        r#"<div class="card"><h2>Recent Blocks</h2>
<div id="blocks-table" class="dim">Loading block history&hellip;</div></div>"#
            .to_string()
    })
    .await
}

/// Payments page shell.
async fn payments(State(state): State<DashboardServer>) -> Result<Html<String>, StatusCode> {
    render_gated(&state, "payments", "Payments", |_| {
        r#"<div class="card"><h2>Payments</h2>
<div id="payments-table" class="dim">Loading payment history&hellip;</div></div>"#
            .to_string()
    })
    .await
}

/// Getting-started page: stratum connection details from the config.
async fn getting_started(State(state): State<DashboardServer>) -> Result<Html<String>, StatusCode> {
    render_gated(&state, "getting_started", "Getting Started", |config| {
        let conn = &config.connection;
        let ssl = if conn.ssl_enabled {
            r#"<span class="badge badge-success">SSL available</span>"#
        } else {
            r#"<span class="badge badge-warning">SSL not offered</span>"#
        };
        format!(
            r#"<div class="card">
    <h2>Connect to {domain}</h2>
    <p class="dim">Region: {region} {ssl}</p>
    <table>
        <thead><tr><th>Hardware</th><th>Endpoint</th></tr></thead>
        <tbody>
            <tr><td>CPU</td><td><code>{domain}:{cpu}</code></td></tr>
            <tr><td>GPU</td><td><code>{domain}:{gpu}</code></td></tr>
            <tr><td>High-end GPU rigs</td><td><code>{domain}:{gpu_high}</code></td></tr>
        </tbody>
    </table>
</div>"#,
            domain = html_escape(&conn.domain),
            region = html_escape(&conn.region),
            ssl = ssl,
            cpu = conn.stratum_port_cpu,
            gpu = conn.stratum_port_gpu,
            gpu_high = conn.stratum_port_gpu_high,
        )
    })
    .await
}

/// Community goals page.
async fn goals(State(state): State<DashboardServer>) -> Result<Html<String>, StatusCode> {
    render_gated(&state, "goals", "Goals", |config| {
        if !config.goals.enabled || config.goals.items.is_empty() {
            return r#"<div class="card"><p class="dim">No community goals configured.</p></div>"#
                .to_string();
        }
        config
            .goals
            .items
            .iter()
            .map(|goal| {
                format!(
                    r#"<div class="card">
    <h2>{icon} {title}</h2>
    <p>{description}</p>
    <p class="dim">Target: {target} XMR &middot; Donate: <code>{wallet}</code></p>
</div>"#,
                    icon = html_escape(&goal.icon),
                    title = html_escape(&goal.title),
                    description = html_escape(&goal.description),
                    target = goal.target_xmr,
                    wallet = html_escape(&goal.wallet_address),
                )
            })
            .collect()
    })
    .await
}

/// Leaderboard page shell.
async fn leaderboard(State(state): State<DashboardServer>) -> Result<Html<String>, StatusCode> {
    render_gated(&state, "leaderboard", "Leaderboard", |_| {
        r#"<div class="card"><h2>Top Miners</h2>
<div id="leaderboard-table" class="dim">Loading leaderboard&hellip;</div></div>"#
            .to_string()
    })
    .await
}

/// The projected theme as a stylesheet.
async fn theme_css(State(state): State<DashboardServer>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.theme.to_css(),
    )
}

/// The resolved configuration as JSON, for client-side consumers.
async fn api_pool_config(
    State(state): State<DashboardServer>,
) -> Result<Json<PoolConfig>, StatusCode> {
    let config = state.config().await?;
    Ok(Json(config.as_ref().clone()))
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the dashboard router.
fn build_router(state: DashboardServer) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/", get(home))
        .route("/miners", get(miners))
        .route("/blocks", get(blocks))
        .route("/payments", get(payments))
        .route("/getting-started", get(getting_started))
        .route("/goals", get(goals))
        .route("/leaderboard", get(leaderboard))
        .route("/theme.css", get(theme_css))
        .route("/api/pool-config", get(api_pool_config))
        .route("/api/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server on the specified port.
///
/// Returns a oneshot sender that signals shutdown, and the actual address
/// the server is bound to.
pub async fn start_server(
    cache: Arc<ConfigCache>,
    theme: Arc<StyleRoot>,
    port: u16,
) -> anyhow::Result<(oneshot::Sender<()>, SocketAddr)> {
    let state = DashboardServer::new(cache, theme, port);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("dashboard listening on http://{}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("dashboard shutting down");
            })
            .await
        {
            tracing::error!("dashboard server error: {}", e);
        }
    });

    Ok((shutdown_tx, bound_addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoinConfig;

    #[test]
    fn test_home_content_escapes_operator_urls() {
        let mut config = PoolConfig::default();
        config.coins.insert(
            "monero1".to_string(),
            CoinConfig {
                display_name: "Monero".to_string(),
                explorer_url: r#"https://x.example/"><script>bad()</script>"#.to_string(),
                ..CoinConfig::default()
            },
        );
        config.discord.enabled = true;
        config.discord.invite_url = Some(r#"https://discord.gg/pool" onclick="bad()"#.to_string());

        let content = home_content(&config);
        assert!(!content.contains("<script>"));
        assert!(!content.contains(r#"pool" onclick"#));
        assert!(content.contains("&quot;&gt;&lt;script&gt;"));
        assert!(content.contains("https://discord.gg/pool&quot;"));
    }

    #[test]
    fn test_home_content_without_coins() {
        let config = PoolConfig::default();
        let content = home_content(&config);
        assert!(content.contains("No coins configured yet."));
    }
}
