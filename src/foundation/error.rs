/// Convenience result type used across scatterglyph.
pub type ScatterResult<T> = Result<T, ScatterError>;

/// Top-level error taxonomy for scene composition and export.
///
/// The layout generators never fail; every variant here originates at the configuration, capture
/// or delivery boundaries.
#[derive(thiserror::Error, Debug)]
pub enum ScatterError {
    /// Export was triggered while the primary text is empty.
    #[error("input guard: primary text is empty, export is disabled")]
    InputGuard,

    /// No scene is attached for the current inputs, so there is nothing to capture.
    #[error("capture unavailable: {0}")]
    CaptureUnavailable(String),

    /// The exporter failed to turn the scene into an encoded raster.
    #[error("rasterization error: {0}")]
    Rasterization(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScatterError {
    /// Build a [`ScatterError::CaptureUnavailable`] value.
    pub fn capture_unavailable(msg: impl Into<String>) -> Self {
        Self::CaptureUnavailable(msg.into())
    }

    /// Build a [`ScatterError::Rasterization`] value.
    pub fn rasterization(msg: impl Into<String>) -> Self {
        Self::Rasterization(msg.into())
    }

    /// Build a [`ScatterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScatterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
