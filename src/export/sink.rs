use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{foundation::error::ScatterResult, render::raster::RasterImage};

/// Persists an encoded export under a suggested filename.
pub trait DownloadSink {
    /// Hand `image` to the download mechanism.
    fn deliver(&mut self, filename: &str, image: &RasterImage) -> ScatterResult<()>;
}

/// Writes exports into a directory, replacing any existing file of the same name.
#[derive(Clone, Debug)]
pub struct FileDownload {
    dir: PathBuf,
    last_path: Option<PathBuf>,
}

impl FileDownload {
    /// Deliver into `dir` (created on first delivery).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_path: None,
        }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the most recent successful delivery.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }
}

impl DownloadSink for FileDownload {
    fn deliver(&mut self, filename: &str, image: &RasterImage) -> ScatterResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create download dir '{}'", self.dir.display()))?;
        let path = self.dir.join(filename);
        std::fs::write(&path, &image.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        tracing::info!(path = %path.display(), bytes = image.png.len(), "export written");
        self.last_path = Some(path);
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryDownload {
    deliveries: Vec<(String, RasterImage)>,
}

impl InMemoryDownload {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliveries in arrival order.
    pub fn deliveries(&self) -> &[(String, RasterImage)] {
        &self.deliveries
    }
}

impl DownloadSink for InMemoryDownload {
    fn deliver(&mut self, filename: &str, image: &RasterImage) -> ScatterResult<()> {
        self.deliveries.push((filename.to_string(), image.clone()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
