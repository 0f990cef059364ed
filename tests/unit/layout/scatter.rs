use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::assets::palette::in_palette;

#[test]
fn empty_text_yields_empty_layout() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(ScatterTextLayoutEngine.layout("", &mut rng).is_empty());
}

#[test]
fn ambiguous_letters_are_substituted() {
    let mut rng = StdRng::seed_from_u64(0);
    let out = ScatterTextLayoutEngine.layout("Il", &mut rng);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].glyph, 'i');
    assert_eq!(out[1].glyph, 'L');
}

#[test]
fn other_characters_pass_through() {
    assert_eq!(substitute_glyph('i'), 'i');
    assert_eq!(substitute_glyph('L'), 'L');
    assert_eq!(substitute_glyph('1'), '1');
    assert_eq!(substitute_glyph('微'), '微');
}

#[test]
fn one_entry_per_char_not_per_byte() {
    let mut rng = StdRng::seed_from_u64(1);
    let text = "微信ab";
    let out = ScatterTextLayoutEngine.layout(text, &mut rng);
    assert_eq!(out.len(), 4);
    let glyphs: String = out.iter().map(|c| c.glyph).collect();
    assert_eq!(glyphs, text);
}

#[test]
fn ranges_hold_for_every_glyph() {
    let text = "bob99_wechat-ID";
    let n = text.chars().count() as f64;
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = ScatterTextLayoutEngine.layout(text, &mut rng);
        for (i, c) in out.iter().enumerate() {
            let base_x = 5.0 + (i as f64) * 90.0 / n;
            assert!((c.position.x - base_x).abs() <= 5.0 + 1e-9);

            let wave = 50.0 + (i as f64).sin() * 10.0;
            let dy = c.position.y - wave;
            assert!((-1e-9..=10.0 + 1e-9).contains(&dy));

            assert!((-20.0..=20.0).contains(&c.rotation_deg));
            assert!((0.8..=1.2).contains(&c.scale));
            assert!(in_palette(c.color));
        }
    }
}
