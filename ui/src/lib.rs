//! Shared UI crate for the survey insights dashboard. Views, components,
//! the data layer and view-model shaping live here; the `web` and `desktop`
//! crates only own their `Route` enums and launch configuration.

use dioxus::prelude::*;

pub mod charts;
pub mod components;
pub mod config;
pub mod core;
pub mod data;
pub mod i18n;
pub mod labels;
pub mod model;
pub mod nav;
pub mod shape;
pub mod state;
pub mod views;

pub use config::{AppConfig, DataMode};
pub use data::{connect, SharedDataSource};
pub use nav::{register_nav, NavBuilder, NavTarget};

/// Shared theme. Web links it as an asset; desktop inlines the file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
