//! Server side of the Portkey playtest dashboard.
//!
//! Everything that touches the network or rasterizes charts is compiled for
//! native targets only; the wire types in [`panel`] compile everywhere so the
//! web client can decode what [`dashboard_report`] returns.

use dioxus::prelude::*;

pub mod panel;
pub use panel::{ChartBody, ChartPanel, DashboardReport};

#[cfg(not(target_arch = "wasm32"))]
pub mod aggregate;
#[cfg(not(target_arch = "wasm32"))]
pub mod chart;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod fetch;
#[cfg(not(target_arch = "wasm32"))]
pub mod metrics;
#[cfg(not(target_arch = "wasm32"))]
pub mod pipeline;
#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;

/// Fetch the telemetry snapshot, aggregate the four dashboard metrics and
/// render one chart per metric.
#[server(DashboardReportFn)]
pub async fn dashboard_report() -> Result<DashboardReport, ServerFnError> {
    pipeline::shared_report()
        .await
        .map_err(|err| {
            tracing::error!("dashboard render failed: {err}");
            ServerFnError::new(err.to_string())
        })
}
