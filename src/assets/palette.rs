use rand::Rng;

use crate::foundation::core::Rgb8;

/// The fixed color set every generator draws from.
pub const PALETTE: [Rgb8; 5] = [
    Rgb8::new(0xd0, 0x0b, 0x57),
    Rgb8::new(0xeb, 0x89, 0xa7),
    Rgb8::new(0xa7, 0x89, 0xeb),
    Rgb8::new(0x89, 0xeb, 0xa7),
    Rgb8::new(0xeb, 0xa7, 0x89),
];

/// Decorative glyphs used by the emoji field.
pub const EMOJI_GLYPHS: [&str; 16] = [
    "🌸", "✨", "💫", "🌟", "💝", "🎀", "🍠", "🌺", "🎈", "🪽", "🌷", "🍡", "💗", "🎉", "📕", "🔖",
];

/// Uniformly pick a palette color.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb8 {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

/// Uniformly pick a decorative glyph.
pub(crate) fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    EMOJI_GLYPHS[rng.gen_range(0..EMOJI_GLYPHS.len())]
}

/// Whether `color` is one of the palette entries.
pub fn in_palette(color: Rgb8) -> bool {
    PALETTE.contains(&color)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/palette.rs"]
mod tests;
