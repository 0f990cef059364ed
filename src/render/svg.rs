use std::fmt::Write as _;

use crate::{
    foundation::core::Point,
    foundation::math::fmt_num,
    layout::{emoji::DecorativeEmoji, lines::LineSegment, scatter::ScatteredCharacter},
    scene::config::{Background, SceneConfig},
    scene::model::{Caption, LayerKind, Scene},
};

const TEXT_FAMILY: &str = "sans-serif";
const EMOJI_FAMILY: &str = "'Noto Color Emoji', 'Apple Color Emoji', 'Segoe UI Emoji', sans-serif";
// Offset from a glyph box's vertical center to its alphabetic baseline, as a fraction of the
// font size.
const BASELINE_SHIFT: f64 = 0.35;

/// Lower a scene into a standalone SVG document in container pixel units.
///
/// Percent-space positions are mapped through [`crate::Canvas::percent_to_px`]. Layers are
/// emitted in [`Scene::paint_order`], so later elements paint over earlier ones.
pub fn scene_to_svg(scene: &Scene) -> String {
    let cfg = &scene.config;
    let (w, h) = (cfg.canvas.width, cfg.canvas.height);
    let mut out = String::with_capacity(64 * 1024);

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    write_background(&mut out, cfg);

    for kind in scene.paint_order() {
        match kind {
            LayerKind::Field => {
                for seg in scene.field.content.lines() {
                    write_line(&mut out, cfg, seg);
                }
                for e in scene.field.content.emoji() {
                    write_emoji(&mut out, cfg, e);
                }
            }
            LayerKind::TopCaption => write_caption(&mut out, cfg, &scene.top_caption.content),
            LayerKind::Primary => {
                let font_px = scene.primary.content.font_px;
                for c in &scene.primary.content.chars {
                    write_scattered(&mut out, cfg, font_px, c);
                }
            }
            LayerKind::BottomCaption => {
                write_caption(&mut out, cfg, &scene.bottom_caption.content)
            }
        }
    }

    out.push_str("</svg>");
    out
}

fn to_px(cfg: &SceneConfig, p: Point) -> Point {
    cfg.canvas.percent_to_px() * p
}

fn write_background(out: &mut String, cfg: &SceneConfig) {
    let Background::LinearGradient { from, to } = cfg.background else {
        return;
    };
    let _ = write!(
        out,
        r#"<defs><linearGradient id="bg" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="{from}"/><stop offset="1" stop-color="{to}"/></linearGradient></defs><rect x="0" y="0" width="{}" height="{}" fill="url(#bg)"/>"#,
        cfg.canvas.width, cfg.canvas.height
    );
}

fn write_line(out: &mut String, cfg: &SceneConfig, seg: &LineSegment) {
    let end = Point::new(
        seg.origin.x + seg.length * seg.angle.cos(),
        seg.origin.y + seg.length * seg.angle.sin(),
    );
    let a = to_px(cfg, seg.origin);
    let b = to_px(cfg, end);
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
        fmt_num(a.x),
        fmt_num(a.y),
        fmt_num(b.x),
        fmt_num(b.y),
        seg.color,
        fmt_num(cfg.line_thickness_px),
        fmt_num(cfg.line_opacity)
    );
}

/// Opening `<text>` for a glyph whose box top-left sits at `pos`, rotated and scaled about the
/// box center.
fn open_glyph(out: &mut String, pos: Point, font_px: f64, rotation_deg: f64, scale: f64) {
    let half = font_px / 2.0;
    let _ = write!(
        out,
        r#"<text x="0" y="{}" text-anchor="middle" font-size="{}" transform="translate({} {}) rotate({}) scale({})""#,
        fmt_num(font_px * BASELINE_SHIFT),
        fmt_num(font_px),
        fmt_num(pos.x + half),
        fmt_num(pos.y + half),
        fmt_num(rotation_deg),
        fmt_num(scale)
    );
}

fn write_emoji(out: &mut String, cfg: &SceneConfig, e: &DecorativeEmoji) {
    open_glyph(
        out,
        to_px(cfg, e.position),
        cfg.emoji_font_px,
        e.rotation_deg,
        e.scale,
    );
    let _ = write!(
        out,
        r#" font-family="{}" opacity="{}">{}</text>"#,
        EMOJI_FAMILY,
        fmt_num(e.opacity),
        escape_text(&e.glyph)
    );
}

fn write_scattered(out: &mut String, cfg: &SceneConfig, font_px: f64, c: &ScatteredCharacter) {
    let mut buf = [0u8; 4];
    let glyph = escape_text(c.glyph.encode_utf8(&mut buf));
    if glyph.is_empty() {
        return;
    }
    open_glyph(out, to_px(cfg, c.position), font_px, c.rotation_deg, c.scale);
    let _ = write!(
        out,
        r#" font-family="{TEXT_FAMILY}" font-weight="bold" fill="{}">{glyph}</text>"#,
        c.color
    );
}

fn write_caption(out: &mut String, cfg: &SceneConfig, caption: &Caption) {
    let text = escape_text(&caption.text);
    if text.is_empty() {
        return;
    }
    let anchor = to_px(cfg, caption.anchor);
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="{TEXT_FAMILY}" font-size="{}" fill="{}">{text}</text>"#,
        fmt_num(anchor.x),
        fmt_num(anchor.y + caption.font_px * BASELINE_SHIFT),
        fmt_num(caption.font_px),
        caption.color
    );
}

/// Escape markup characters and drop characters XML 1.0 cannot carry (C0/C1 controls,
/// including tabs and newlines, which have no meaning on a single-line label).
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
