use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use crate::{
    assets::fonts::build_fontdb,
    foundation::error::{ScatterError, ScatterResult},
    render::raster::{RasterImage, rasterize_scene},
    scene::model::Scene,
};

/// Filename suggested to the download mechanism.
pub const DEFAULT_FILENAME: &str = "scatter-image.png";

/// Options for capturing and delivering an export.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOpts {
    /// Supersampling factor over the container's native resolution.
    pub scale: f32,
    /// Suggested download filename.
    pub filename: String,
}

impl Default for ExportOpts {
    fn default() -> Self {
        Self {
            scale: 2.0,
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl ExportOpts {
    /// Reject scales outside `(0, 8]` and filenames that are empty or contain path separators.
    pub fn validate(&self) -> ScatterResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > 8.0 {
            return Err(ScatterError::validation(format!(
                "export scale must be in (0, 8], got {}",
                self.scale
            )));
        }
        let name = self.filename.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(ScatterError::validation(format!(
                "export filename must be a plain file name, got '{}'",
                self.filename
            )));
        }
        Ok(())
    }
}

/// Captures a rendered scene into an encoded raster.
///
/// Capture is the only suspending step of an export. Implementations own their own timeout and
/// cancellation policy.
pub trait ImageExporter {
    /// Rasterize `scene`.
    fn capture(&self, scene: &Scene) -> impl Future<Output = ScatterResult<RasterImage>>;
}

/// CPU exporter: lowers the scene to SVG and rasterizes it with `resvg`.
#[derive(Clone)]
pub struct ResvgExporter {
    scale: f32,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl ResvgExporter {
    /// Build an exporter using system fonts.
    pub fn new(opts: &ExportOpts) -> ScatterResult<Self> {
        Self::with_font_dirs(opts, &[])
    }

    /// Build an exporter using system fonts plus any fonts found in `font_dirs`.
    pub fn with_font_dirs(opts: &ExportOpts, font_dirs: &[&Path]) -> ScatterResult<Self> {
        opts.validate()?;
        Ok(Self {
            scale: opts.scale,
            fontdb: build_fontdb(font_dirs),
        })
    }

    /// Supersampling factor applied to every capture.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl ImageExporter for ResvgExporter {
    fn capture(&self, scene: &Scene) -> impl Future<Output = ScatterResult<RasterImage>> {
        async move { rasterize_scene(scene, self.scale, &self.fontdb) }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/exporter.rs"]
mod tests;
