//! Builder for configuring SoftwareRegistry initialization.

use super::SoftwareRegistry;
use crate::error::Result;
use crate::platform::{default_user_core_dir, AppDirs, FileSystem, StandardDirs, TokioFileSystem};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Builder for configuring SoftwareRegistry initialization.
///
/// # Example
///
/// ```rust,ignore
/// use software_core::SoftwareRegistry;
///
/// let registry = SoftwareRegistry::builder("/opt/app/core")
///     .user_core_dir("/home/me/.local/share/software-registry")
///     .build()?;
/// let list = registry.get_list().await?;
/// ```
pub struct SoftwareRegistryBuilder {
    core_dir: PathBuf,
    user_core_dir: Option<PathBuf>,
    software_root: Option<PathBuf>,
    fs: Option<Arc<dyn FileSystem>>,
}

impl SoftwareRegistryBuilder {
    /// Create a new builder with the bundled core directory.
    pub fn new(core_dir: impl Into<PathBuf>) -> Self {
        Self {
            core_dir: core_dir.into(),
            user_core_dir: None,
            software_root: None,
            fs: None,
        }
    }

    /// Set the user-writable core directory.
    ///
    /// Default: the platform data directory plus `software-registry`
    pub fn user_core_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_core_dir = Some(dir.into());
        self
    }

    /// Set the software root holding the type directories.
    ///
    /// Default: `<user_core_dir>/software`
    pub fn software_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.software_root = Some(dir.into());
        self
    }

    /// Use a custom file system implementation.
    ///
    /// Default: [`TokioFileSystem`]
    pub fn file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = Some(fs);
        self
    }

    /// Resolve the directory layout without building a registry.
    pub fn build_dirs(&self) -> Result<StandardDirs> {
        let user_core_dir = match &self.user_core_dir {
            Some(dir) => dir.clone(),
            None => default_user_core_dir()?,
        };

        let mut dirs = StandardDirs::new(self.core_dir.clone(), user_core_dir);
        if let Some(root) = &self.software_root {
            dirs = dirs.with_software_root(root.clone());
        }
        Ok(dirs)
    }

    /// Build the SoftwareRegistry instance.
    ///
    /// No catalog is read until the first lookup.
    pub fn build(self) -> Result<SoftwareRegistry> {
        let dirs = self.build_dirs()?;
        debug!(
            "Software registry: core {}, user {}, software root {}",
            dirs.core_dir().display(),
            dirs.user_core_dir().display(),
            dirs.software_root_dir().display()
        );

        let fs: Arc<dyn FileSystem> = match self.fs {
            Some(fs) => fs,
            None => Arc::new(TokioFileSystem),
        };
        Ok(SoftwareRegistry::new(fs, Arc::new(dirs)))
    }
}
