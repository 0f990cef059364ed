use rand::Rng;

use crate::{assets::palette::random_glyph, foundation::core::Point};

/// Number of glyphs in an emoji field.
pub const EMOJI_COUNT: usize = 50;

/// Inclusive opacity range for decorative glyphs.
pub const OPACITY_RANGE: (f64, f64) = (0.15, 0.35);
/// Inclusive scale range for decorative glyphs.
pub const SCALE_RANGE: (f64, f64) = (1.2, 1.7);

/// A rotated, scaled, translucent glyph somewhere on the canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecorativeEmoji {
    /// Glyph from [`crate::EMOJI_GLYPHS`].
    pub glyph: String,
    /// Position in percent-space.
    pub position: Point,
    /// Rotation in degrees, `[0, 360)`.
    pub rotation_deg: f64,
    /// Opacity in `[0.15, 0.35]`.
    pub opacity: f64,
    /// Uniform scale in `[1.2, 1.7]`.
    pub scale: f64,
}

/// Generator for the emoji background.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmojiFieldGenerator;

impl EmojiFieldGenerator {
    /// Sample [`EMOJI_COUNT`] glyphs uniformly over the whole canvas.
    ///
    /// Unlike the line field there is no central-band avoidance; glyphs may sit under the text.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<DecorativeEmoji> {
        (0..EMOJI_COUNT)
            .map(|_| DecorativeEmoji {
                glyph: random_glyph(rng).to_string(),
                position: Point::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)),
                rotation_deg: rng.gen_range(0.0..360.0),
                opacity: rng.gen_range(OPACITY_RANGE.0..=OPACITY_RANGE.1),
                scale: rng.gen_range(SCALE_RANGE.0..=SCALE_RANGE.1),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/emoji.rs"]
mod tests;
