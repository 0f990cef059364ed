use std::io::Cursor;
use std::sync::Arc;

use crate::{
    assets::fonts::font_resolver,
    foundation::error::{ScatterError, ScatterResult},
    render::svg::scene_to_svg,
    scene::model::Scene,
};

/// An encoded raster artifact ready for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// PNG-encoded bytes (straight alpha).
    pub png: Vec<u8>,
}

/// Rasterize `scene` at `scale` times its native container size and encode it as PNG.
///
/// Pixels outside any painted element stay fully transparent, so a [`crate::Background::Transparent`]
/// scene exports with a transparent background.
pub fn rasterize_scene(
    scene: &Scene,
    scale: f32,
    fontdb: &Arc<usvg::fontdb::Database>,
) -> ScatterResult<RasterImage> {
    let (width, height) = scene.canvas().scaled(scale)?;
    let svg = scene_to_svg(scene);

    let opts = usvg::Options {
        fontdb: Arc::clone(fontdb),
        font_resolver: font_resolver(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts)
        .map_err(|e| ScatterError::rasterization(format!("parse scene svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ScatterError::rasterization("failed to allocate scene pixmap"))?;
    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let png = encode_png(&pixmap)?;
    tracing::debug!(width, height, bytes = png.len(), "scene rasterized");
    Ok(RasterImage { width, height, png })
}

fn encode_png(pixmap: &resvg::tiny_skia::Pixmap) -> ScatterResult<Vec<u8>> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let img = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .ok_or_else(|| ScatterError::rasterization("pixel buffer does not match pixmap size"))?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| ScatterError::rasterization(format!("encode png: {e}")))?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
