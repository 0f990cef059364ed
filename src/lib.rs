//! scatterglyph renders a short piece of text over randomized decorative noise and exports the
//! result as a PNG.
//!
//! The output is meant to stay easy for people to read while being harder for automated text
//! scanners to pick up. It makes no promise about any particular recognizer.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: three independent generators sample fresh geometry from an injected RNG:
//!    [`LineFieldGenerator`], [`EmojiFieldGenerator`] and [`ScatterTextLayoutEngine`].
//! 2. **Compose**: [`CompositionRenderer`] places the selected decorative field and the three text
//!    layers into an immutable [`Scene`] in percent-space (`[0,100]` on both axes).
//! 3. **Export**: [`ExportSession::trigger_export`] awaits an [`ImageExporter`] capture of the
//!    attached scene and hands the PNG to a [`DownloadSink`].
//!
//! Geometry is never cached: every recomputation draws new noise. Seed the RNG
//! (`rand::rngs::StdRng::seed_from_u64`) when reproducible output is needed.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod export;
mod foundation;
mod layout;
mod render;
mod scene;

pub use assets::palette::{EMOJI_GLYPHS, PALETTE, in_palette, random_color};
pub use export::exporter::{DEFAULT_FILENAME, ExportOpts, ImageExporter, ResvgExporter};
pub use export::session::{ExportReceipt, ExportSession, ExportState};
pub use export::sink::{DownloadSink, FileDownload, InMemoryDownload};
pub use foundation::core::{Affine, Canvas, Point, Rect, Rgb8, Vec2};
pub use foundation::error::{ScatterError, ScatterResult};
pub use layout::emoji::{DecorativeEmoji, EMOJI_COUNT, EmojiFieldGenerator};
pub use layout::lines::{
    CENTER_BAND, LineFieldGenerator, LineSegment, POINTS_PER_TRACK, SEGMENT_COUNT, TRACK_COUNT,
    avoid_center_band,
};
pub use layout::scatter::{ScatterTextLayoutEngine, ScatteredCharacter, substitute_glyph};
pub use render::raster::{RasterImage, rasterize_scene};
pub use render::svg::scene_to_svg;
pub use scene::compose::{CompositionRenderer, FIELD_Z, TEXT_Z};
pub use scene::config::{Background, SceneConfig};
pub use scene::model::{
    Caption, DecorativeField, FieldMode, Interaction, Layer, LayerKind, Scene, SceneInputs,
    ScatterLayer,
};
