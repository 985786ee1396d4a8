//! Shared UI crate for the Portkey playtest dashboard.

pub mod core;
pub mod dashboard;
pub mod views;

/// Shared theme, inlined into the document by each launcher.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
