//! Error taxonomy for the dashboard pipeline.

use thiserror::Error;

/// A single player record could not contribute to an aggregate.
///
/// These are recovered per record: the aggregator logs them and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("missing field `{0}`")]
    Missing(String),
    #[error("field `{field}` is not {expected} (found {found})")]
    Malformed {
        field: String,
        expected: &'static str,
        found: String,
    },
}

/// The telemetry snapshot could not be retrieved or decoded.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("telemetry endpoint returned HTTP {status}")]
    Status { status: u16 },
    #[error("telemetry payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("telemetry payload must be a JSON object keyed by player id, found {found}")]
    Shape { found: &'static str },
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transport { source, .. } if source.is_timeout())
    }
}

/// A chart could not be turned into its output format.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("generated chart SVG could not be parsed: {0}")]
    Svg(String),
    #[error("unable to allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("chart `{chart}` failed to render: {source}")]
    Render {
        chart: String,
        #[source]
        source: RenderError,
    },
}
