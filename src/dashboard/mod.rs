//! Web dashboard HTTP server module.
//!
//! Serves the themed pages, the projected stylesheet and the configuration
//! API. Pages the operator disables in `pool.config.yml` return 404.

mod server;
pub mod templates;

pub use server::{DashboardServer, start_server};
