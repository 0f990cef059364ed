use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn palette_entries_are_distinct() {
    for (i, a) in PALETTE.iter().enumerate() {
        for b in &PALETTE[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn random_picks_stay_in_sets_and_cover_them() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen_colors = std::collections::HashSet::new();
    let mut seen_glyphs = std::collections::HashSet::new();
    for _ in 0..2_000 {
        let c = random_color(&mut rng);
        assert!(in_palette(c));
        seen_colors.insert(c);

        let g = random_glyph(&mut rng);
        assert!(EMOJI_GLYPHS.contains(&g));
        seen_glyphs.insert(g);
    }
    assert_eq!(seen_colors.len(), PALETTE.len());
    assert_eq!(seen_glyphs.len(), EMOJI_GLYPHS.len());
}

#[test]
fn in_palette_rejects_other_colors() {
    assert!(!in_palette(Rgb8::WHITE));
}
