//! Chart rendering.
//!
//! Both renderers draw the same stacked bar chart (see [`layout`] and
//! [`svg`]); they differ only in what they hand to the page. Which one is used
//! is a deployment setting, see [`crate::config::DashboardConfig`].

pub mod layout;
pub mod png;
pub mod svg;

pub use crate::error::RenderError;
pub use png::ImageRenderer;
pub use svg::MarkupRenderer;

use crate::{aggregate::LevelSeries, metrics::ChartSpec, panel::ChartBody};

pub trait ChartRenderer: Send + Sync {
    fn render(&self, spec: &ChartSpec, series: &LevelSeries) -> Result<ChartBody, RenderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererKind {
    /// Static PNG embedded as a data URL.
    #[default]
    Image,
    /// Interactive inline SVG.
    Markup,
}

impl RendererKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "image" | "png" => Some(Self::Image),
            "markup" | "svg" => Some(Self::Markup),
            _ => None,
        }
    }

    pub fn renderer(self) -> &'static dyn ChartRenderer {
        match self {
            RendererKind::Image => &ImageRenderer,
            RendererKind::Markup => &MarkupRenderer,
        }
    }
}
