use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::assets::palette::EMOJI_GLYPHS;

#[test]
fn field_has_fixed_size_and_ranges() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = EmojiFieldGenerator.generate(&mut rng);
        assert_eq!(field.len(), 50);
        for e in &field {
            assert!(EMOJI_GLYPHS.contains(&e.glyph.as_str()));
            assert!((0.15..=0.35).contains(&e.opacity), "opacity {}", e.opacity);
            assert!((1.2..=1.7).contains(&e.scale), "scale {}", e.scale);
            assert!((0.0..360.0).contains(&e.rotation_deg));
            assert!((0.0..100.0).contains(&e.position.x));
            assert!((0.0..100.0).contains(&e.position.y));
        }
    }
}

#[test]
fn consecutive_fields_each_satisfy_invariants() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = EmojiFieldGenerator.generate(&mut rng);
    let b = EmojiFieldGenerator.generate(&mut rng);
    assert_eq!(a.len(), b.len());
    assert_ne!(a, b);
}

#[test]
fn same_seed_reproduces_the_field() {
    let a = EmojiFieldGenerator.generate(&mut StdRng::seed_from_u64(42));
    let b = EmojiFieldGenerator.generate(&mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}
