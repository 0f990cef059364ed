use std::fmt;
use std::str::FromStr;

use crate::{
    foundation::core::{Canvas, Point, Rect, Rgb8},
    foundation::error::{ScatterError, ScatterResult},
    layout::{emoji::DecorativeEmoji, lines::LineSegment, scatter::ScatteredCharacter},
    scene::config::SceneConfig,
};

/// Which decorative field sits under the text. Exactly one is used per scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMode {
    /// Wavy colored line segments that avoid the text band.
    Lines,
    /// Scattered translucent emoji over the whole canvas.
    #[default]
    Emoji,
}

impl fmt::Display for FieldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lines => "lines",
            Self::Emoji => "emoji",
        })
    }
}

impl FromStr for FieldMode {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" => Ok(Self::Lines),
            "emoji" => Ok(Self::Emoji),
            other => Err(ScatterError::validation(format!(
                "unknown field mode '{other}' (expected 'lines' or 'emoji')"
            ))),
        }
    }
}

/// Host-collected inputs for one scene.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneInputs {
    /// Caption shown above the scattered text.
    pub top: String,
    /// Primary text to scatter. Export requires it to be non-empty.
    pub primary: String,
    /// Caption shown below the scattered text.
    pub bottom: String,
    /// Decorative field selection.
    pub mode: FieldMode,
}

impl SceneInputs {
    /// Whether the export precondition (non-empty primary text) holds.
    pub fn can_export(&self) -> bool {
        !self.primary.is_empty()
    }
}

/// Pointer and selection behavior of a scene layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Interaction {
    /// Whether the layer intercepts pointer input.
    pub pointer_events: bool,
    /// Whether the layer's text can be selected.
    pub selectable: bool,
}

impl Interaction {
    /// Neither hit-testable nor selectable. Every generated layer uses this.
    pub const INERT: Self = Self {
        pointer_events: false,
        selectable: false,
    };
}

/// Content plus its stacking and interaction metadata.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer<T> {
    /// Paint order; lower values are painted first.
    pub z_index: i32,
    /// Interaction flags for the host surface.
    pub interaction: Interaction,
    /// Layer payload.
    pub content: T,
}

impl<T> Layer<T> {
    pub(crate) fn inert(z_index: i32, content: T) -> Self {
        Self {
            z_index,
            interaction: Interaction::INERT,
            content,
        }
    }
}

/// The decorative background: lines or emoji, never both.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", content = "items", rename_all = "lowercase")]
pub enum DecorativeField {
    /// Line segments from [`crate::LineFieldGenerator`].
    Lines(Vec<LineSegment>),
    /// Glyphs from [`crate::EmojiFieldGenerator`].
    Emoji(Vec<DecorativeEmoji>),
}

impl DecorativeField {
    /// The mode this field was generated for.
    pub fn mode(&self) -> FieldMode {
        match self {
            Self::Lines(_) => FieldMode::Lines,
            Self::Emoji(_) => FieldMode::Emoji,
        }
    }

    /// Line segments, empty in emoji mode.
    pub fn lines(&self) -> &[LineSegment] {
        match self {
            Self::Lines(v) => v,
            Self::Emoji(_) => &[],
        }
    }

    /// Emoji, empty in lines mode.
    pub fn emoji(&self) -> &[DecorativeEmoji] {
        match self {
            Self::Lines(_) => &[],
            Self::Emoji(v) => v,
        }
    }
}

/// A single centered line of caption text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Caption {
    /// Caption text. Empty captions occupy no vertical space and paint nothing.
    pub text: String,
    /// Center of the caption line in canvas percent-space.
    pub anchor: Point,
    /// Font size in container pixels.
    pub font_px: f64,
    /// Text color.
    pub color: Rgb8,
}

/// The scattered primary text, already mapped into canvas percent-space.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScatterLayer {
    /// Band the glyphs were laid out in, in canvas percent-space.
    pub band: Rect,
    /// Base font size in container pixels (before per-glyph scale).
    pub font_px: f64,
    /// Glyphs in input order.
    pub chars: Vec<ScatteredCharacter>,
}

/// Identifies one of the four scene layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LayerKind {
    /// The decorative field.
    Field,
    /// Caption above the scattered text.
    TopCaption,
    /// Scattered primary text.
    Primary,
    /// Caption below the scattered text.
    BottomCaption,
}

/// Immutable snapshot of everything to paint, in canvas percent-space.
///
/// A scene is a plain value: it is rebuilt from scratch on every recomputation and carries no
/// behavior beyond accessors and (de)serialization.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Container metrics and theme the scene was laid out with.
    pub config: SceneConfig,
    /// Decorative background.
    pub field: Layer<DecorativeField>,
    /// Caption above the scattered text.
    pub top_caption: Layer<Caption>,
    /// Scattered primary text.
    pub primary: Layer<ScatterLayer>,
    /// Caption below the scattered text.
    pub bottom_caption: Layer<Caption>,
}

impl Scene {
    /// Native container size.
    pub fn canvas(&self) -> Canvas {
        self.config.canvas
    }

    /// Decorative mode of this scene.
    pub fn mode(&self) -> FieldMode {
        self.field.content.mode()
    }

    /// Scattered glyphs in input order.
    pub fn chars(&self) -> &[ScatteredCharacter] {
        &self.primary.content.chars
    }

    /// Layers in paint order (ascending z, ties keep declaration order).
    pub fn paint_order(&self) -> [LayerKind; 4] {
        let mut order = [
            (self.field.z_index, LayerKind::Field),
            (self.top_caption.z_index, LayerKind::TopCaption),
            (self.primary.z_index, LayerKind::Primary),
            (self.bottom_caption.z_index, LayerKind::BottomCaption),
        ];
        order.sort_by_key(|(z, _)| *z);
        order.map(|(_, kind)| kind)
    }

    /// Interaction flags of every layer.
    pub fn interactions(&self) -> [Interaction; 4] {
        [
            self.field.interaction,
            self.top_caption.interaction,
            self.primary.interaction,
            self.bottom_caption.interaction,
        ]
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ScatterResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScatterError::serde(format!("serialize scene: {e}")))
    }

    /// Parse a scene previously produced by [`Scene::to_json`].
    pub fn from_json(s: &str) -> ScatterResult<Self> {
        serde_json::from_str(s).map_err(|e| ScatterError::serde(format!("parse scene JSON: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
