use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::FrameResult;

/// File name offered for the exported model.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "photo-frame.glb";

/// Destination for exported bytes ("save as downloadable file").
///
/// Sinks receive the exporter output unchanged.
pub trait ByteSink {
    /// Store `bytes` under `file_name`.
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> FrameResult<()>;
}

/// Writes exports into a directory on disk.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Sink writing into `dir` (created on first save).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ByteSink for FileSink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> FrameResult<()> {
        ensure_dir(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes).with_context(|| format!("write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "saved export");
        Ok(())
    }
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Saved files in call order.
    pub(crate) files: Vec<(String, Vec<u8>)>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the saved `(file_name, bytes)` pairs.
    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }
}

impl ByteSink for InMemorySink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> FrameResult<()> {
        self.files.push((file_name.to_owned(), bytes.to_vec()));
        Ok(())
    }
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> FrameResult<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).with_context(|| format!("create dir '{}'", dir.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
