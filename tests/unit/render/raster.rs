use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::assets::fonts::build_fontdb;
use crate::scene::compose::CompositionRenderer;
use crate::scene::config::{Background, SceneConfig};
use crate::scene::model::{FieldMode, SceneInputs};

fn compose(mode: FieldMode, cfg: SceneConfig) -> Scene {
    let inputs = SceneInputs {
        top: "Hi".to_string(),
        primary: "bob99".to_string(),
        bottom: "Bye".to_string(),
        mode,
    };
    CompositionRenderer::new(cfg)
        .unwrap()
        .compose(&inputs, &mut StdRng::seed_from_u64(5))
}

fn decode(img: &RasterImage) -> image::RgbaImage {
    image::load_from_memory_with_format(&img.png, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8()
}

#[test]
fn export_is_twice_the_native_size() {
    let db = build_fontdb(&[]);
    let img = rasterize_scene(&compose(FieldMode::Emoji, SceneConfig::default()), 2.0, &db).unwrap();
    assert_eq!((img.width, img.height), (800, 800));
    let decoded = decode(&img);
    assert_eq!(decoded.dimensions(), (800, 800));
}

#[test]
fn gradient_background_is_opaque_and_light() {
    let db = build_fontdb(&[]);
    let img = rasterize_scene(&compose(FieldMode::Lines, SceneConfig::default()), 1.0, &db).unwrap();
    let px = decode(&img);
    let corner = px.get_pixel(0, 0);
    assert_eq!(corner[3], 255);
    assert!(corner[0] > 240 && corner[1] > 230 && corner[2] > 230);
}

#[test]
fn transparent_background_leaves_untouched_pixels_clear() {
    let db = build_fontdb(&[]);
    let cfg = SceneConfig {
        background: Background::Transparent,
        ..SceneConfig::default()
    };
    let img = rasterize_scene(&compose(FieldMode::Lines, cfg), 1.0, &db).unwrap();
    let px = decode(&img);
    assert!(px.pixels().any(|p| p[3] == 0), "expected transparent pixels");
    assert!(px.pixels().any(|p| p[3] != 0), "expected painted line pixels");
}

#[test]
fn invalid_scale_is_rejected() {
    let db = build_fontdb(&[]);
    let scene = compose(FieldMode::Emoji, SceneConfig::default());
    assert!(matches!(
        rasterize_scene(&scene, 0.0, &db),
        Err(ScatterError::Validation(_))
    ));
}
