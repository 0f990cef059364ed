use std::fmt;

use crate::foundation::error::{ScatterError, ScatterResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Largest raster edge the exporter will allocate.
pub(crate) const MAX_RASTER_DIM: u32 = 16_384;

/// Native pixel size of the scene container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

impl Canvas {
    /// Build a canvas, rejecting zero-sized edges.
    pub fn new(width: u32, height: u32) -> ScatterResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScatterError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Affine mapping percent-space (`[0,100]` on both axes) into container pixels.
    pub fn percent_to_px(self) -> Affine {
        Affine::scale_non_uniform(
            f64::from(self.width) / 100.0,
            f64::from(self.height) / 100.0,
        )
    }

    /// Pixel size of a raster captured at `scale` times the native resolution.
    pub fn scaled(self, scale: f32) -> ScatterResult<(u32, u32)> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ScatterError::validation(format!(
                "raster scale must be finite and > 0, got {scale}"
            )));
        }
        let w = ((self.width as f32) * scale).round().max(1.0) as u32;
        let h = ((self.height as f32) * scale).round().max(1.0) as u32;
        if w > MAX_RASTER_DIM || h > MAX_RASTER_DIM {
            return Err(ScatterError::validation(format!(
                "raster size too large: {w}x{h} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
            )));
        }
        Ok((w, h))
    }
}

/// Straight (non-premultiplied) sRGB color, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Opaque white.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    /// Build a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> ScatterResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| ScatterError::validation(format!("invalid hex color '{s}'")))
        };

        match hex.len() {
            6 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => {
                let (r, g, b) = (channel(0..1)?, channel(1..2)?, channel(2..3)?);
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ScatterError::validation(format!(
                "hex color must have 3 or 6 digits, got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
