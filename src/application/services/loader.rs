//! Ontology loading service
//!
//! Reads the ontology document from the program directory and parses it as JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::application::LoadError;
use crate::infrastructure::traits::FileSystem;

/// Service that loads JSON documents relative to a base directory.
pub struct LoaderService {
    fs: Arc<dyn FileSystem>,
    base_dir: PathBuf,
}

impl LoaderService {
    /// Create a new loader resolving filenames against `base_dir`.
    pub fn new(fs: Arc<dyn FileSystem>, base_dir: PathBuf) -> Self {
        Self { fs, base_dir }
    }

    /// Directory filenames are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a filename against the base directory.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// Read and parse a JSON document.
    ///
    /// A missing file, unreadable file and malformed JSON are distinct
    /// `LoadError` variants; none of them is retried.
    pub fn load(&self, filename: &str) -> Result<Value, LoadError> {
        let path = self.resolve(filename);
        debug!("load: path={}", path.display());

        if !self.fs.exists(&path) {
            return Err(LoadError::NotFound {
                filename: filename.to_string(),
                path,
                dir: self.base_dir.clone(),
            });
        }

        let content = self.fs.read_to_string(&path)?;
        let document: Value = serde_json::from_str(&content)?;
        debug!("load: parsed {} bytes", content.len());
        Ok(document)
    }
}
