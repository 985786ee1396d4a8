//! Wire types shared between the server function and the dashboard view.

use serde::{Deserialize, Serialize};

/// Everything the dashboard page needs for one render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardReport {
    /// RFC 3339 timestamp (UTC) of when the report was built.
    pub generated_at: String,
    /// Number of entries in the fetched telemetry snapshot.
    pub player_count: usize,
    /// Charts in display order.
    pub panels: Vec<ChartPanel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPanel {
    pub id: String,
    pub title: String,
    pub chart: ChartBody,
    /// Distinct levels plotted.
    pub levels: usize,
    /// Records left out of this chart because a required field was missing or malformed.
    pub skipped: usize,
}

/// Rendered chart, either a static image or inline markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartBody {
    /// `data:image/png;base64,...` URL suitable for an `img` element.
    Image { data_url: String },
    /// Standalone `<svg>` element with hover titles on every bar segment.
    Markup { svg: String },
}

impl ChartPanel {
    pub fn has_skipped_records(&self) -> bool {
        self.skipped > 0
    }

    pub fn is_empty(&self) -> bool {
        self.levels == 0
    }
}
