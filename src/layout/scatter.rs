use rand::Rng;

use crate::{
    assets::palette::random_color,
    foundation::core::{Point, Rgb8},
};

const MARGIN_X: f64 = 5.0;
const JITTER_X: f64 = 5.0;
const BASELINE_Y: f64 = 50.0;
const WAVE_AMPLITUDE: f64 = 10.0;
const JITTER_Y: f64 = 10.0;
const MAX_ROTATION_DEG: f64 = 20.0;
const SCALE_RANGE: (f64, f64) = (0.8, 1.2);

/// One glyph of the primary text after substitution and scatter.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScatteredCharacter {
    /// Glyph after [`substitute_glyph`].
    pub glyph: char,
    /// Position in percent-space of the containing band.
    pub position: Point,
    /// Rotation in degrees, `[-20, 20]`.
    pub rotation_deg: f64,
    /// Uniform scale in `[0.8, 1.2]`.
    pub scale: f64,
    /// Fill color, always a palette entry.
    pub color: Rgb8,
}

/// Lays out the primary text as a loose, wavy row of individually jittered glyphs.
///
/// One entry is produced per `char` (Unicode scalar value) of the input, in input order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScatterTextLayoutEngine;

impl ScatterTextLayoutEngine {
    /// Scatter `text` across the band. Empty input yields an empty layout.
    pub fn layout<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<ScatteredCharacter> {
        let n = text.chars().count();
        if n == 0 {
            return Vec::new();
        }
        let step = (100.0 - 2.0 * MARGIN_X) / n as f64;

        text.chars()
            .enumerate()
            .map(|(i, ch)| {
                let fi = i as f64;
                let x = MARGIN_X + fi * step + rng.gen_range(-JITTER_X..=JITTER_X);
                let y = BASELINE_Y + fi.sin() * WAVE_AMPLITUDE + rng.gen_range(0.0..=JITTER_Y);
                ScatteredCharacter {
                    glyph: substitute_glyph(ch),
                    position: Point::new(x, y),
                    rotation_deg: rng.gen_range(-MAX_ROTATION_DEG..=MAX_ROTATION_DEG),
                    scale: rng.gen_range(SCALE_RANGE.0..=SCALE_RANGE.1),
                    color: random_color(rng),
                }
            })
            .collect()
    }
}

/// Swap the easily confused `I` and `l` for `i` and `L`; every other char is unchanged.
pub fn substitute_glyph(ch: char) -> char {
    match ch {
        'I' => 'i',
        'l' => 'L',
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scatter.rs"]
mod tests;
