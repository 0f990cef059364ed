use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::foundation::core::Rgb8;
use crate::scene::model::{Interaction, LayerKind};

fn inputs(top: &str, primary: &str, bottom: &str, mode: FieldMode) -> SceneInputs {
    SceneInputs {
        top: top.to_string(),
        primary: primary.to_string(),
        bottom: bottom.to_string(),
        mode,
    }
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn emoji_mode_builds_only_emoji() {
    let r = CompositionRenderer::default();
    let mut rng = StdRng::seed_from_u64(1);
    let scene = r.compose(&inputs("Hi", "bob99", "Bye", FieldMode::Emoji), &mut rng);
    assert_eq!(scene.mode(), FieldMode::Emoji);
    assert_eq!(scene.field.content.emoji().len(), 50);
    assert!(scene.field.content.lines().is_empty());
    assert_eq!(scene.chars().len(), 5);
}

#[test]
fn lines_mode_builds_only_lines() {
    let r = CompositionRenderer::default();
    let mut rng = StdRng::seed_from_u64(2);
    let scene = r.compose(&inputs("", "x", "", FieldMode::Lines), &mut rng);
    assert_eq!(scene.field.content.lines().len(), 300);
    assert!(scene.field.content.emoji().is_empty());
}

#[test]
fn every_layer_is_inert_and_field_paints_first() {
    let r = CompositionRenderer::default();
    let mut rng = StdRng::seed_from_u64(3);
    let scene = r.compose(&inputs("a", "b", "c", FieldMode::Lines), &mut rng);
    for i in scene.interactions() {
        assert_eq!(i, Interaction::INERT);
    }
    assert_eq!(
        scene.paint_order(),
        [
            LayerKind::Field,
            LayerKind::TopCaption,
            LayerKind::Primary,
            LayerKind::BottomCaption
        ]
    );
    assert!(scene.field.z_index < scene.primary.z_index);
}

#[test]
fn band_positions_map_into_the_padded_canvas() {
    let r = CompositionRenderer::default();
    let c = |x: f64, y: f64| ScatteredCharacter {
        glyph: 'a',
        position: Point::new(x, y),
        rotation_deg: 0.0,
        scale: 1.0,
        color: Rgb8::WHITE,
    };
    let scene = r.assemble(
        &inputs("", "ab", "", FieldMode::Emoji),
        DecorativeField::Emoji(vec![]),
        vec![c(0.0, 0.0), c(100.0, 100.0)],
    );

    // 400x400 canvas, 24px padding, no top caption: band is x 24..376, y 24..152.
    assert!(close(scene.chars()[0].position, Point::new(6.0, 6.0)));
    assert!(close(scene.chars()[1].position, Point::new(94.0, 38.0)));
    let band = scene.primary.content.band;
    assert!((band.x0 - 6.0).abs() < 1e-9 && (band.y1 - 38.0).abs() < 1e-9);
}

#[test]
fn captions_push_the_band_down() {
    let r = CompositionRenderer::default();
    let with = r.assemble(
        &inputs("top", "p", "bottom", FieldMode::Emoji),
        DecorativeField::Emoji(vec![]),
        vec![],
    );
    let without = r.assemble(
        &inputs("", "p", "", FieldMode::Emoji),
        DecorativeField::Emoji(vec![]),
        vec![],
    );

    // Top caption adds one line (24px) plus the gap (32px) = 56px = 14%.
    let shift = with.primary.content.band.y0 - without.primary.content.band.y0;
    assert!((shift - 14.0).abs() < 1e-9);

    assert!((with.top_caption.content.anchor.x - 50.0).abs() < 1e-9);
    assert!(with.top_caption.content.anchor.y < with.primary.content.band.y0);
    assert!(with.bottom_caption.content.anchor.y > with.primary.content.band.y1);
    assert_eq!(with.top_caption.content.text, "top");
    assert_eq!(with.bottom_caption.content.text, "bottom");
}

#[test]
fn assemble_is_pure() {
    let r = CompositionRenderer::default();
    let mut rng = StdRng::seed_from_u64(8);
    let i = inputs("t", "hello", "b", FieldMode::Lines);
    let field = DecorativeField::Lines(LineFieldGenerator.generate(&mut rng));
    let chars = ScatterTextLayoutEngine.layout(&i.primary, &mut rng);
    let a = r.assemble(&i, field.clone(), chars.clone());
    let b = r.assemble(&i, field, chars);
    assert_eq!(a, b);
}

#[test]
fn recomputation_draws_fresh_geometry() {
    let r = CompositionRenderer::default();
    let mut rng = StdRng::seed_from_u64(4);
    let i = inputs("", "same", "", FieldMode::Lines);
    let a = r.compose(&i, &mut rng);
    let b = r.compose(&i, &mut rng);
    assert_ne!(a.field, b.field);
    assert_eq!(a.field.content.lines().len(), b.field.content.lines().len());
}

#[test]
fn renderer_rejects_invalid_config() {
    let cfg = SceneConfig {
        band_height_px: -1.0,
        ..SceneConfig::default()
    };
    assert!(CompositionRenderer::new(cfg).is_err());
}
