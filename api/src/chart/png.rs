//! Static chart images: the SVG drawing rasterized to PNG and embedded as a
//! base64 data URL.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::svg::{render_svg, SvgStyle};
use super::{ChartRenderer, RenderError};
use crate::{aggregate::LevelSeries, metrics::ChartSpec, panel::ChartBody};

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageRenderer;

impl ChartRenderer for ImageRenderer {
    fn render(&self, spec: &ChartSpec, series: &LevelSeries) -> Result<ChartBody, RenderError> {
        let svg = render_svg(spec, series, SvgStyle::Static);
        let png = rasterize(&svg)?;
        Ok(ChartBody::Image {
            data_url: format!("data:image/png;base64,{}", STANDARD.encode(png)),
        })
    }
}

/// Render an SVG document to PNG bytes at its intrinsic size.
///
/// Text uses the system fonts; on a host without any, the bars, axes and
/// ticks still render and the labels are simply left out.
pub fn rasterize(svg: &str) -> Result<Vec<u8>, RenderError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|err| RenderError::Svg(err.to_string()))?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(
        RenderError::Canvas {
            width: size.width(),
            height: size.height(),
        },
    )?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| RenderError::Encode(err.to_string()))
}
