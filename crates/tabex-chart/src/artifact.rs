//! Content-addressed chart artifact storage.
//!
//! Each rendered chart is written under the output directory with a name
//! derived from the blake3 hash of its bytes. Concurrent runs that each
//! produce a chart therefore write distinct files (or byte-identical ones),
//! never a torn shared slot.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("artifact io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist an SVG document and return its path.
    pub fn save_svg(&self, svg: &str) -> Result<PathBuf, ChartError> {
        fs::create_dir_all(&self.dir)?;
        let digest = blake3::hash(svg.as_bytes()).to_hex();
        let path = self.dir.join(format!("chart-{}.svg", &digest[..16]));
        fs::write(&path, svg)?;
        Ok(path)
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new("outputs")
    }
}
