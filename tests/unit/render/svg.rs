use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::scene::compose::CompositionRenderer;
use crate::scene::model::{FieldMode, SceneInputs};

fn scene(top: &str, primary: &str, bottom: &str, mode: FieldMode, cfg: SceneConfig) -> Scene {
    let inputs = SceneInputs {
        top: top.to_string(),
        primary: primary.to_string(),
        bottom: bottom.to_string(),
        mode,
    };
    CompositionRenderer::new(cfg)
        .unwrap()
        .compose(&inputs, &mut StdRng::seed_from_u64(21))
}

#[test]
fn lines_mode_emits_one_line_per_segment() {
    let s = scene("", "abc", "", FieldMode::Lines, SceneConfig::default());
    let svg = scene_to_svg(&s);
    assert_eq!(svg.matches("<line ").count(), 300);
    assert_eq!(svg.matches("font-weight=\"bold\"").count(), 3);
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn emoji_mode_emits_no_lines() {
    let s = scene("Hi", "bob99", "Bye", FieldMode::Emoji, SceneConfig::default());
    let svg = scene_to_svg(&s);
    assert_eq!(svg.matches("<line ").count(), 0);
    assert_eq!(svg.matches("opacity=").count(), 50);
    assert!(svg.contains(">Hi</text>"));
    assert!(svg.contains(">Bye</text>"));
}

#[test]
fn field_is_emitted_before_text() {
    let s = scene("top", "x", "", FieldMode::Lines, SceneConfig::default());
    let svg = scene_to_svg(&s);
    let last_line = svg.rfind("<line ").unwrap();
    let caption = svg.find(">top</text>").unwrap();
    assert!(last_line < caption);
}

#[test]
fn empty_captions_paint_nothing() {
    let s = scene("", "x", "", FieldMode::Emoji, SceneConfig::default());
    let svg = scene_to_svg(&s);
    let captions = svg.matches("font-size=\"16\"").count();
    assert_eq!(captions, 0);
}

#[test]
fn transparent_background_skips_the_gradient() {
    let cfg = SceneConfig {
        background: Background::Transparent,
        ..SceneConfig::default()
    };
    let svg = scene_to_svg(&scene("", "x", "", FieldMode::Emoji, cfg));
    assert!(!svg.contains("linearGradient"));

    let svg = scene_to_svg(&scene("", "x", "", FieldMode::Emoji, SceneConfig::default()));
    assert!(svg.contains("stop-color=\"#fff5f5\""));
}

#[test]
fn markup_in_user_text_is_escaped_and_parses() {
    let s = scene(
        "<b>&\"'",
        "a<b\u{0007}",
        "x\ty",
        FieldMode::Emoji,
        SceneConfig::default(),
    );
    let svg = scene_to_svg(&s);
    assert!(svg.contains("&lt;b&gt;&amp;&quot;&apos;"));
    assert!(svg.contains(">xy</text>"));
    assert!(!svg.contains('\u{0007}'));
    usvg::Tree::from_str(&svg, &usvg::Options::default()).expect("generated svg must parse");
}

#[test]
fn escape_text_drops_controls_only() {
    assert_eq!(escape_text("a\u{0000}b\nc"), "abc");
    assert_eq!(escape_text("微信 ok"), "微信 ok");
}
