//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::services::{ExportService, LoaderService};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Directory input is read from and output is written to
    pub base_dir: PathBuf,

    pub loader: LoaderService,
    pub export: ExportService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    ///
    /// Without a configured `base_dir`, files live next to the executable.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let base_dir = match &settings.base_dir {
            Some(dir) => dir.clone(),
            None => program_dir()?,
        };
        Ok(Self::with_deps(settings, Arc::new(RealFileSystem), base_dir))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>, base_dir: PathBuf) -> Self {
        let settings = Arc::new(settings);
        let loader = LoaderService::new(Arc::clone(&fs), base_dir.clone());
        let export = ExportService::new(fs, base_dir.clone());

        Self {
            settings,
            base_dir,
            loader,
            export,
        }
    }
}

/// Directory containing the running executable.
pub fn program_dir() -> InfraResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| InfraError::io("locate executable", e))?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        InfraError::io(
            format!("resolve directory of {}", exe.display()),
            std::io::Error::new(std::io::ErrorKind::NotFound, "executable has no parent"),
        )
    })
}
