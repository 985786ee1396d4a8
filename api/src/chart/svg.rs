//! SVG drawing of a [`ChartLayout`].
//!
//! The same document backs both renderers: the image renderer rasterizes the
//! static variant, the markup renderer embeds the interactive variant directly.

use std::fmt::Write as _;

use super::layout::{Bar, ChartLayout, Segment, HEIGHT, WIDTH};
use super::{ChartRenderer, RenderError};
use crate::{aggregate::LevelSeries, metrics::ChartSpec, panel::ChartBody};

const LOWER_COLOR: &str = "#1f77b4";
const UPPER_COLOR: &str = "#ff7f0e";
const AXIS_COLOR: &str = "#333333";
const MUTED_COLOR: &str = "#8a8f98";
const FONT_FAMILY: &str = "DejaVu Sans, Arial, Helvetica, sans-serif";

const INTERACTIVE_STYLE: &str = ".chart__segment{transition:opacity .15s}.chart__segment:hover{opacity:.75}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgStyle {
    /// Plain drawing, suitable for rasterizing.
    Static,
    /// Adds hover styling and a `<title>` tooltip on every bar segment.
    Interactive,
}

/// Inline `<svg>` markup with hover tooltips.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupRenderer;

impl ChartRenderer for MarkupRenderer {
    fn render(&self, spec: &ChartSpec, series: &LevelSeries) -> Result<ChartBody, RenderError> {
        Ok(ChartBody::Markup {
            svg: render_svg(spec, series, SvgStyle::Interactive),
        })
    }
}

pub fn render_svg(spec: &ChartSpec, series: &LevelSeries, style: SvgStyle) -> String {
    let layout = ChartLayout::compute(series);
    let plot = layout.plot;
    let mut svg = String::with_capacity(8 * 1024);

    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" class="chart chart--{id}" role="img" aria-label="{title}" font-family="{FONT_FAMILY}">"##,
        id = escape_xml(spec.id),
        title = escape_xml(spec.title),
    );
    if style == SvgStyle::Interactive {
        let _ = write!(svg, "<style>{INTERACTIVE_STYLE}</style>");
    }
    let _ = write!(
        svg,
        r##"<rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}" fill="#ffffff"/>"##
    );

    // Title and axis labels.
    let _ = write!(
        svg,
        r##"<text x="{x:.2}" y="30" text-anchor="middle" font-size="16" fill="{AXIS_COLOR}">{title}</text>"##,
        x = WIDTH / 2.0,
        title = escape_xml(spec.title),
    );
    let _ = write!(
        svg,
        r##"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="12" fill="{AXIS_COLOR}">{label}</text>"##,
        x = plot.center_x(),
        y = HEIGHT - 18.0,
        label = escape_xml(spec.x_label),
    );
    let _ = write!(
        svg,
        r##"<text x="0" y="0" transform="translate(20 {y:.2}) rotate(-90)" text-anchor="middle" font-size="12" fill="{AXIS_COLOR}">{label}</text>"##,
        y = plot.center_y(),
        label = escape_xml(spec.y_label),
    );

    // Y ticks with light grid lines.
    for tick in &layout.y_ticks {
        let _ = write!(
            svg,
            r##"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="#e5e7eb" stroke-width="1"/><line x1="{x0:.2}" y1="{y:.2}" x2="{x1:.2}" y2="{y:.2}" stroke="{AXIS_COLOR}" stroke-width="1"/><text x="{tx:.2}" y="{ty:.2}" text-anchor="end" font-size="11" fill="{AXIS_COLOR}">{value:.0}</text>"##,
            x0 = plot.left - 5.0,
            x1 = plot.left,
            x2 = plot.right,
            y = tick.position,
            tx = plot.left - 8.0,
            ty = tick.position + 4.0,
            value = tick.value,
        );
    }

    // X ticks, one per level.
    for tick in &layout.x_ticks {
        let _ = write!(
            svg,
            r##"<line x1="{x:.2}" y1="{y1:.2}" x2="{x:.2}" y2="{y2:.2}" stroke="{AXIS_COLOR}" stroke-width="1"/><text x="{x:.2}" y="{ty:.2}" text-anchor="middle" font-size="11" fill="{AXIS_COLOR}">{value}</text>"##,
            x = tick.position,
            y1 = plot.bottom,
            y2 = plot.bottom + 5.0,
            ty = plot.bottom + 18.0,
            value = tick.value,
        );
    }

    for bar in &layout.bars {
        write_bar(&mut svg, spec, bar, style);
    }

    if layout.bars.is_empty() {
        let _ = write!(
            svg,
            r##"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="13" fill="{MUTED_COLOR}">No data</text>"##,
            x = plot.center_x(),
            y = plot.center_y(),
        );
    }

    // Axes drawn last so bars never cover them.
    let _ = write!(
        svg,
        r##"<line x1="{l:.2}" y1="{b:.2}" x2="{r:.2}" y2="{b:.2}" stroke="{AXIS_COLOR}" stroke-width="1"/><line x1="{l:.2}" y1="{t:.2}" x2="{l:.2}" y2="{b:.2}" stroke="{AXIS_COLOR}" stroke-width="1"/>"##,
        l = plot.left,
        r = plot.right,
        t = plot.top,
        b = plot.bottom,
    );

    write_legend(&mut svg, spec, plot.right, plot.top);

    svg.push_str("</svg>");
    svg
}

fn write_bar(svg: &mut String, spec: &ChartSpec, bar: &Bar, style: SvgStyle) {
    let _ = write!(svg, r##"<g class="chart__bar" data-level="{}">"##, bar.level);
    for (segment, color, label) in [
        (&bar.lower, LOWER_COLOR, spec.lower_label),
        (&bar.upper, UPPER_COLOR, spec.upper_label),
    ] {
        if segment.height <= 0.0 {
            continue;
        }
        write_segment(svg, spec, bar, segment, color, label, style);
    }
    for segment in [&bar.lower, &bar.upper] {
        if segment.is_visible() {
            let _ = write!(
                svg,
                r##"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="10" fill="#ffffff">{value}</text>"##,
                x = bar.center_x(),
                y = segment.label_y() + 3.5,
                value = spec.value_format.format(segment.value),
            );
        }
    }
    svg.push_str("</g>");
}

fn write_segment(
    svg: &mut String,
    spec: &ChartSpec,
    bar: &Bar,
    segment: &Segment,
    color: &str,
    label: &str,
    style: SvgStyle,
) {
    let _ = write!(
        svg,
        r##"<rect class="chart__segment" x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{color}">"##,
        x = bar.x,
        y = segment.y,
        w = bar.width,
        h = segment.height,
    );
    if style == SvgStyle::Interactive {
        let _ = write!(
            svg,
            "<title>Level {level} · {label}: {value}</title>",
            level = bar.level,
            label = escape_xml(label),
            value = spec.value_format.format(segment.value),
        );
    }
    svg.push_str("</rect>");
}

fn write_legend(svg: &mut String, spec: &ChartSpec, right: f64, top: f64) {
    let width = 150.0;
    let x = right - width - 8.0;
    let y = top + 8.0;
    let _ = write!(
        svg,
        r##"<g class="chart__legend"><rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="44" fill="#ffffff" fill-opacity="0.85" stroke="#d1d5db"/>"##,
    );
    for (row, (color, label)) in [(LOWER_COLOR, spec.lower_label), (UPPER_COLOR, spec.upper_label)]
        .into_iter()
        .enumerate()
    {
        let row_y = y + 8.0 + row as f64 * 18.0;
        let _ = write!(
            svg,
            r##"<rect x="{sx:.2}" y="{row_y:.2}" width="14" height="10" fill="{color}"/><text x="{tx:.2}" y="{ty:.2}" font-size="11" fill="{AXIS_COLOR}">{label}</text>"##,
            sx = x + 8.0,
            tx = x + 28.0,
            ty = row_y + 9.0,
            label = escape_xml(label),
        );
    }
    svg.push_str("</g>");
}

pub(crate) fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
