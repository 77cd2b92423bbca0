//! Export service
//!
//! Saves extracted children as pretty JSON and as a plain-text name list.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::application::report::render_name_list_file;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::ExtractedChildren;
use crate::infrastructure::traits::FileSystem;

/// Service writing report files into an output directory.
pub struct ExportService {
    fs: Arc<dyn FileSystem>,
    output_dir: PathBuf,
}

impl ExportService {
    /// Create a new export service writing into `output_dir`.
    pub fn new(fs: Arc<dyn FileSystem>, output_dir: PathBuf) -> Self {
        Self { fs, output_dir }
    }

    /// Save the summary as JSON (2-space indentation, non-ASCII kept literal).
    ///
    /// Returns the path written.
    pub fn save_json(
        &self,
        summary: &ExtractedChildren,
        filename: &str,
    ) -> ApplicationResult<PathBuf> {
        let path = self.output_dir.join(filename);
        debug!("save_json: path={}", path.display());

        let content =
            serde_json::to_string_pretty(summary).map_err(|e| ApplicationError::OperationFailed {
                context: "serialize extracted children".to_string(),
                source: Box::new(e),
            })?;
        self.fs
            .write(&path, &content)
            .with_path_context("write JSON", &path)?;
        Ok(path)
    }

    /// Save the numbered child names of both branches plus a statistics block.
    ///
    /// Returns the path written.
    pub fn save_name_list(
        &self,
        summary: &ExtractedChildren,
        filename: &str,
    ) -> ApplicationResult<PathBuf> {
        let path = self.output_dir.join(filename);
        debug!("save_name_list: path={}", path.display());

        self.fs
            .write(&path, &render_name_list_file(summary))
            .with_path_context("write name list", &path)?;
        Ok(path)
    }
}
