//! Writes the generated page to disk

use crate::error::{SiteError, SiteResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the generated page inside the output directory
pub const INDEX_FILE_NAME: &str = "index.html";

/// Path of the page for a given output directory (pure function)
pub fn index_path(output_dir: &Path) -> PathBuf {
    output_dir.join(INDEX_FILE_NAME)
}

/// Final pipeline step: persist HTML as `<output_dir>/index.html`
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteWriter;

impl SiteWriter {
    pub fn new() -> Self {
        Self
    }

    /// Create `output_dir` (and parents) if needed, then overwrite `index.html` with `html`.
    ///
    /// Nothing else in the directory is touched. A failed write may leave a truncated file.
    pub async fn write(&self, html: &str, output_dir: &Path) -> SiteResult<PathBuf> {
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|e| SiteError::filesystem(output_dir, e))?;

        let file_path = index_path(output_dir);
        debug!(path = %file_path.display(), bytes = html.len(), "Writing page");

        tokio::fs::write(&file_path, html.as_bytes())
            .await
            .map_err(|e| SiteError::filesystem(&file_path, e))?;

        info!(path = %file_path.display(), "Website built");
        Ok(file_path)
    }
}
