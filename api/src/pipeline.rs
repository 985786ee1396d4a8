//! Fetch → aggregate → render, once per dashboard request.

use once_cell::sync::OnceCell;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::{
    aggregate::aggregate,
    chart::ChartRenderer,
    config::DashboardConfig,
    error::{DashboardError, FetchError},
    fetch::{SnapshotCache, TelemetryClient},
    metrics::DASHBOARD_CHARTS,
    panel::{ChartPanel, DashboardReport},
    telemetry::Snapshot,
};

static SHARED: OnceCell<Dashboard> = OnceCell::new();

/// Everything one deployment needs to serve the dashboard.
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    client: TelemetryClient,
    cache: SnapshotCache,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Result<Self, FetchError> {
        let client = TelemetryClient::from_config(&config)?;
        Ok(Self::with_client(config, client))
    }

    /// Like [`Dashboard::new`] but fetching through `client` instead of the
    /// configured URL and timeout.
    pub fn with_client(config: DashboardConfig, client: TelemetryClient) -> Self {
        Self {
            config,
            client,
            cache: SnapshotCache::new(),
        }
    }

    /// The process-wide instance built from [`DashboardConfig::global`].
    pub fn shared() -> Result<&'static Dashboard, FetchError> {
        SHARED.get_or_try_init(|| Dashboard::new(DashboardConfig::global().clone()))
    }

    pub async fn report(&self) -> Result<DashboardReport, DashboardError> {
        let snapshot = self
            .cache
            .get_or_fetch(&self.client, self.config.cache_ttl)
            .await?;
        let panels = build_panels(&snapshot, self.config.renderer.renderer())?;

        Ok(DashboardReport {
            generated_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
            player_count: snapshot.len(),
            panels,
        })
    }
}

/// Report for the shared dashboard instance.
pub async fn shared_report() -> Result<DashboardReport, DashboardError> {
    Dashboard::shared()?.report().await
}

/// Aggregate and render every dashboard chart, in display order.
pub fn build_panels(
    snapshot: &Snapshot,
    renderer: &dyn ChartRenderer,
) -> Result<Vec<ChartPanel>, DashboardError> {
    DASHBOARD_CHARTS
        .iter()
        .map(|spec| {
            let series = aggregate(snapshot, spec.aggregation);
            if !series.skipped.is_empty() {
                tracing::info!(
                    chart = spec.id,
                    skipped = series.skipped.len(),
                    players = snapshot.len(),
                    "chart built from partial data"
                );
            }

            let chart = renderer
                .render(spec, &series)
                .map_err(|source| DashboardError::Render {
                    chart: spec.id.to_string(),
                    source,
                })?;

            Ok(ChartPanel {
                id: spec.id.to_string(),
                title: spec.title.to_string(),
                chart,
                levels: series.levels.len(),
                skipped: series.skipped.len(),
            })
        })
        .collect()
}
