use rand::Rng;

use crate::{
    assets::palette::random_color,
    foundation::core::{Point, Rgb8},
    foundation::math::segment_between,
};

/// Number of independent wavy tracks in a line field.
pub const TRACK_COUNT: usize = 10;
/// Sample points per track; consecutive pairs become segments.
pub const POINTS_PER_TRACK: usize = 31;
/// Total segments produced by [`LineFieldGenerator::generate`].
pub const SEGMENT_COUNT: usize = TRACK_COUNT * (POINTS_PER_TRACK - 1);

/// Open vertical band (percent-space) kept clear for the text block.
pub const CENTER_BAND: (f64, f64) = (30.0, 70.0);
const PUSH_UP: f64 = 0.3;
const PUSH_DOWN: f64 = 1.3;

/// One short straight piece of a decorative track.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineSegment {
    /// Start point in percent-space.
    pub origin: Point,
    /// Euclidean length in percent units.
    pub length: f64,
    /// Direction in radians, measured from +x towards +y (screen down).
    pub angle: f64,
    /// Stroke color, always a palette entry.
    pub color: Rgb8,
}

/// Generator for the wavy line background.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineFieldGenerator;

impl LineFieldGenerator {
    /// Sample a fresh field of [`SEGMENT_COUNT`] segments.
    ///
    /// Tracks run left to right with x evenly spaced over `[0,100]`. Each y is uniform over
    /// `[0,100)` and then pushed out of [`CENTER_BAND`] by [`avoid_center_band`].
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<LineSegment> {
        let mut out = Vec::with_capacity(SEGMENT_COUNT);
        let mut points = Vec::with_capacity(POINTS_PER_TRACK);
        let steps = (POINTS_PER_TRACK - 1) as f64;

        for _ in 0..TRACK_COUNT {
            points.clear();
            for i in 0..POINTS_PER_TRACK {
                let x = (i as f64 / steps) * 100.0;
                let y = avoid_center_band(rng.gen_range(0.0..100.0), rng);
                points.push(Point::new(x, y));
            }

            for pair in points.windows(2) {
                let (length, angle) = segment_between(pair[0], pair[1]);
                out.push(LineSegment {
                    origin: pair[0],
                    length,
                    angle,
                    color: random_color(rng),
                });
            }
        }

        out
    }
}

/// Push `y` out of the open band `(30, 70)` by scaling it by 0.3 or 1.3 with equal odds.
///
/// Values outside the band are returned unchanged and consume no randomness. The result is not
/// clamped, so a pushed-down point may land slightly past 90.
pub fn avoid_center_band<R: Rng + ?Sized>(y: f64, rng: &mut R) -> f64 {
    if y > CENTER_BAND.0 && y < CENTER_BAND.1 {
        if rng.gen_bool(0.5) {
            y * PUSH_UP
        } else {
            y * PUSH_DOWN
        }
    } else {
        y
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/lines.rs"]
mod tests;
