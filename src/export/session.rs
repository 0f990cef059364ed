use rand::Rng;

use crate::{
    export::exporter::{ExportOpts, ImageExporter},
    export::sink::DownloadSink,
    foundation::error::{ScatterError, ScatterResult},
    scene::compose::CompositionRenderer,
    scene::model::{Scene, SceneInputs},
};

/// Where an export is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum ExportState {
    /// Nothing in flight. Also the state after a failed export.
    #[default]
    Idle,
    /// Waiting for the exporter to return a raster.
    Capturing,
    /// The last export was delivered.
    Exported,
}

/// Summary of a delivered export.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ExportReceipt {
    /// Filename handed to the download sink.
    pub filename: String,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Encoded size in bytes.
    pub byte_len: usize,
}

/// Host-facing driver: holds the current inputs and scene and runs the export state machine.
///
/// A scene is *attached* by [`ExportSession::recompute`] and detached whenever the inputs change,
/// so a capture can never see geometry laid out for stale inputs.
pub struct ExportSession {
    renderer: CompositionRenderer,
    filename: String,
    inputs: SceneInputs,
    scene: Option<Scene>,
    state: ExportState,
    last_failure: Option<String>,
}

impl ExportSession {
    /// Create a session with empty inputs and no attached scene.
    pub fn new(renderer: CompositionRenderer, opts: &ExportOpts) -> ScatterResult<Self> {
        opts.validate()?;
        Ok(Self {
            renderer,
            filename: opts.filename.clone(),
            inputs: SceneInputs::default(),
            scene: None,
            state: ExportState::Idle,
            last_failure: None,
        })
    }

    /// Current inputs.
    pub fn inputs(&self) -> &SceneInputs {
        &self.inputs
    }

    /// Replace the inputs. Any attached scene is detached if they differ.
    pub fn set_inputs(&mut self, inputs: SceneInputs) {
        if inputs != self.inputs {
            self.inputs = inputs;
            self.scene = None;
        }
    }

    /// Recompute the scene for the current inputs with fresh randomness and attach it.
    #[tracing::instrument(skip(self, rng))]
    pub fn recompute<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Scene {
        let scene = self.renderer.compose(&self.inputs, rng);
        self.scene.insert(scene)
    }

    /// The attached scene, if it is current.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Export lifecycle state.
    pub fn state(&self) -> ExportState {
        self.state
    }

    /// Whether a trigger would start a capture: primary text is present and nothing is in flight.
    pub fn is_export_enabled(&self) -> bool {
        self.inputs.can_export() && self.state != ExportState::Capturing
    }

    /// Message of the most recent failed export, cleared by the next success.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Capture the attached scene with `exporter` and deliver it to `sink`.
    ///
    /// With an empty primary text the trigger is inert: it returns [`ScatterError::InputGuard`]
    /// without touching the state, the exporter or the sink. The session stays exclusively borrowed
    /// until the capture resolves, so a second trigger cannot overlap it; if the returned future is
    /// dropped mid-capture the state falls back to [`ExportState::Idle`].
    #[tracing::instrument(skip_all)]
    pub async fn trigger_export<E, S>(
        &mut self,
        exporter: &E,
        sink: &mut S,
    ) -> ScatterResult<ExportReceipt>
    where
        E: ImageExporter,
        S: DownloadSink,
    {
        if !self.inputs.can_export() {
            tracing::debug!("export trigger ignored: primary text is empty");
            return Err(ScatterError::InputGuard);
        }

        let result = match self.scene.as_ref() {
            None => Err(ScatterError::capture_unavailable(
                "no scene attached for the current inputs; recompute before exporting",
            )),
            Some(scene) => {
                let mut flight = InFlight::begin(&mut self.state);
                let out = capture_and_deliver(scene, exporter, sink, &self.filename).await;
                flight.land(if out.is_ok() {
                    ExportState::Exported
                } else {
                    ExportState::Idle
                });
                out
            }
        };

        match &result {
            Ok(receipt) => {
                self.last_failure = None;
                tracing::info!(
                    filename = %receipt.filename,
                    width = receipt.width,
                    height = receipt.height,
                    "export delivered"
                );
            }
            Err(err) => {
                tracing::error!(%err, "export failed");
                self.last_failure = Some(err.to_string());
            }
        }
        result
    }
}

async fn capture_and_deliver<E, S>(
    scene: &Scene,
    exporter: &E,
    sink: &mut S,
    filename: &str,
) -> ScatterResult<ExportReceipt>
where
    E: ImageExporter,
    S: DownloadSink,
{
    let image = exporter.capture(scene).await?;
    if image.png.is_empty() {
        return Err(ScatterError::rasterization("exporter returned an empty image"));
    }
    sink.deliver(filename, &image)?;
    Ok(ExportReceipt {
        filename: filename.to_string(),
        width: image.width,
        height: image.height,
        byte_len: image.png.len(),
    })
}

/// Holds the state at `Capturing` until landed; resets to `Idle` if dropped unlanded.
struct InFlight<'a> {
    state: &'a mut ExportState,
    landed: bool,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a mut ExportState) -> Self {
        *state = ExportState::Capturing;
        Self {
            state,
            landed: false,
        }
    }

    fn land(&mut self, next: ExportState) {
        *self.state = next;
        self.landed = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.landed {
            *self.state = ExportState::Idle;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/session.rs"]
mod tests;
