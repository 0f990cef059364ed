use rand::Rng;

use crate::{
    foundation::core::{Affine, Point, Rect},
    foundation::error::ScatterResult,
    layout::{
        emoji::EmojiFieldGenerator, lines::LineFieldGenerator, scatter::ScatteredCharacter,
        scatter::ScatterTextLayoutEngine,
    },
    scene::config::SceneConfig,
    scene::model::{
        Caption, DecorativeField, FieldMode, Layer, Scene, SceneInputs, ScatterLayer,
    },
};

/// z-index of the decorative field.
pub const FIELD_Z: i32 = 0;
/// z-index shared by the three text layers.
pub const TEXT_Z: i32 = 10;

/// Vertical placement of the text block, in container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
struct TextBlock {
    top_center_y: f64,
    band: Rect,
    bottom_center_y: f64,
}

/// Assembles generator output and captions into a [`Scene`].
#[derive(Clone, Debug, Default)]
pub struct CompositionRenderer {
    config: SceneConfig,
}

impl CompositionRenderer {
    /// Build a renderer for `config`, rejecting unusable metrics.
    pub fn new(config: SceneConfig) -> ScatterResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Metrics and theme used for every composed scene.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Run the generators for `inputs.mode` with fresh randomness and assemble the result.
    ///
    /// Only the selected field generator runs; the other field is never built.
    #[tracing::instrument(skip(self, inputs, rng), fields(mode = %inputs.mode))]
    pub fn compose<R: Rng + ?Sized>(&self, inputs: &SceneInputs, rng: &mut R) -> Scene {
        let field = match inputs.mode {
            FieldMode::Lines => DecorativeField::Lines(LineFieldGenerator.generate(rng)),
            FieldMode::Emoji => DecorativeField::Emoji(EmojiFieldGenerator.generate(rng)),
        };
        let chars = ScatterTextLayoutEngine.layout(&inputs.primary, rng);
        let scene = self.assemble(inputs, field, chars);
        tracing::debug!(
            lines = scene.field.content.lines().len(),
            emoji = scene.field.content.emoji().len(),
            chars = scene.chars().len(),
            "scene composed"
        );
        scene
    }

    /// Place already-generated geometry. Pure: the same arguments always give the same scene.
    ///
    /// `chars` are expected in band-relative percent-space (as produced by
    /// [`ScatterTextLayoutEngine::layout`]) and are mapped into canvas percent-space here.
    pub fn assemble(
        &self,
        inputs: &SceneInputs,
        field: DecorativeField,
        chars: Vec<ScatteredCharacter>,
    ) -> Scene {
        let cfg = &self.config;
        let block = self.text_block(inputs);
        let to_percent = cfg.canvas.percent_to_px().inverse();
        let center_x = f64::from(cfg.canvas.width) / 2.0;

        let band_to_canvas = to_percent
            * Affine::translate((block.band.x0, block.band.y0))
            * Affine::scale_non_uniform(block.band.width() / 100.0, block.band.height() / 100.0);

        let chars = chars
            .into_iter()
            .map(|c| ScatteredCharacter {
                position: band_to_canvas * c.position,
                ..c
            })
            .collect();

        let caption = |text: &str, center_y: f64| Caption {
            text: text.to_string(),
            anchor: to_percent * Point::new(center_x, center_y),
            font_px: cfg.caption_font_px,
            color: cfg.caption_color,
        };

        Scene {
            config: cfg.clone(),
            field: Layer::inert(FIELD_Z, field),
            top_caption: Layer::inert(TEXT_Z, caption(&inputs.top, block.top_center_y)),
            primary: Layer::inert(
                TEXT_Z,
                ScatterLayer {
                    band: to_percent.transform_rect_bbox(block.band),
                    font_px: cfg.glyph_font_px,
                    chars,
                },
            ),
            bottom_caption: Layer::inert(TEXT_Z, caption(&inputs.bottom, block.bottom_center_y)),
        }
    }

    /// Stack top caption, scatter band and bottom caption from the top padding edge.
    /// Empty captions take no space and drop their gap.
    fn text_block(&self, inputs: &SceneInputs) -> TextBlock {
        let cfg = &self.config;
        let mut y = cfg.padding_px;

        let top_center_y = y + cfg.caption_line_px / 2.0;
        if !inputs.top.is_empty() {
            y += cfg.caption_line_px + cfg.caption_gap_px;
        }

        let band = Rect::new(
            cfg.padding_px,
            y,
            cfg.padding_px + cfg.content_width_px(),
            y + cfg.band_height_px,
        );
        y = band.y1;

        if !inputs.bottom.is_empty() {
            y += cfg.caption_gap_px;
        }
        let bottom_center_y = y + cfg.caption_line_px / 2.0;

        TextBlock {
            top_center_y,
            band,
            bottom_center_y,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
