//! Pool Dash
//!
//! A mining-pool status dashboard whose identity (name, colors, fonts,
//! enabled pages, community goals) is driven entirely by one operator-edited
//! YAML document. This library exports the configuration pipeline, the theme
//! projection and the dashboard server for testing and integration.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod theme;
