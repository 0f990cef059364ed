use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::core::{Canvas, Rgb8},
    foundation::error::{ScatterError, ScatterResult},
};

/// Fill painted behind all layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    /// Nothing is painted; exported pixels stay transparent.
    Transparent,
    /// Diagonal gradient from the top-left corner to the bottom-right corner.
    LinearGradient {
        /// Color at the top-left corner.
        from: Rgb8,
        /// Color at the bottom-right corner.
        to: Rgb8,
    },
}

impl Default for Background {
    fn default() -> Self {
        Self::LinearGradient {
            from: Rgb8::new(0xff, 0xf5, 0xf5),
            to: Rgb8::WHITE,
        }
    }
}

/// Container metrics and theme used to place and paint a scene.
///
/// All lengths are in native container pixels. Missing JSON fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Native container size.
    pub canvas: Canvas,
    /// Inset of the text block from every container edge.
    pub padding_px: f64,
    /// Caption font size.
    pub caption_font_px: f64,
    /// Height of one caption line.
    pub caption_line_px: f64,
    /// Vertical gap between a caption and the scatter band.
    pub caption_gap_px: f64,
    /// Height of the band the primary text is scattered in.
    pub band_height_px: f64,
    /// Base font size of scattered glyphs.
    pub glyph_font_px: f64,
    /// Base font size of decorative emoji.
    pub emoji_font_px: f64,
    /// Opacity applied to every decorative line.
    pub line_opacity: f64,
    /// Stroke thickness of decorative lines.
    pub line_thickness_px: f64,
    /// Caption text color.
    pub caption_color: Rgb8,
    /// Background fill.
    pub background: Background,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            padding_px: 24.0,
            caption_font_px: 16.0,
            caption_line_px: 24.0,
            caption_gap_px: 32.0,
            band_height_px: 128.0,
            glyph_font_px: 24.0,
            emoji_font_px: 24.0,
            line_opacity: 0.5,
            line_thickness_px: 1.0,
            caption_color: Rgb8::new(0x4b, 0x55, 0x63),
            background: Background::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScatterResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ScatterError::serde(format!("parse scene config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScatterResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScatterError::validation(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check that every metric is usable for layout.
    pub fn validate(&self) -> ScatterResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;

        let lengths = [
            ("padding_px", self.padding_px),
            ("caption_line_px", self.caption_line_px),
            ("caption_gap_px", self.caption_gap_px),
            ("band_height_px", self.band_height_px),
            ("line_thickness_px", self.line_thickness_px),
        ];
        for (name, v) in lengths {
            if !v.is_finite() || v < 0.0 {
                return Err(ScatterError::validation(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }

        let fonts = [
            ("caption_font_px", self.caption_font_px),
            ("glyph_font_px", self.glyph_font_px),
            ("emoji_font_px", self.emoji_font_px),
        ];
        for (name, v) in fonts {
            if !v.is_finite() || v <= 0.0 {
                return Err(ScatterError::validation(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.line_opacity) {
            return Err(ScatterError::validation(format!(
                "line_opacity must be in [0, 1], got {}",
                self.line_opacity
            )));
        }

        if self.padding_px * 2.0 >= f64::from(self.canvas.width) {
            return Err(ScatterError::validation(format!(
                "padding_px {} leaves no content width in a {}px canvas",
                self.padding_px, self.canvas.width
            )));
        }

        Ok(())
    }

    /// Width available to the text block.
    pub(crate) fn content_width_px(&self) -> f64 {
        f64::from(self.canvas.width) - 2.0 * self.padding_px
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
