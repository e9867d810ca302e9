//! Base-directory resolution.

use crate::config::{CatalogConfig, SoftwareDirConfig};
use std::path::{Path, PathBuf};

/// Fixed directories for the running installation.
///
/// Every method returns an absolute directory that does not change for the
/// lifetime of the process.
pub trait AppDirs: Send + Sync {
    /// Bundled, read-only application core directory.
    fn core_dir(&self) -> PathBuf;

    /// User-writable core directory.
    fn user_core_dir(&self) -> PathBuf;

    /// Base directory for PHP installations.
    fn php_type_dir(&self) -> PathBuf;

    /// Base directory for server software.
    fn server_type_dir(&self) -> PathBuf;

    /// Base directory for general tools.
    fn tool_type_dir(&self) -> PathBuf;

    /// Root directory containing every type directory.
    fn software_root_dir(&self) -> PathBuf;

    /// Directory holding the bundled catalog.
    fn base_catalog_dir(&self) -> PathBuf {
        self.core_dir().join(CatalogConfig::BASE_DIR)
    }

    /// Directory holding the user override catalog.
    fn custom_catalog_dir(&self) -> PathBuf {
        self.user_core_dir().join(CatalogConfig::CUSTOM_DIR)
    }
}

/// Default directory layout.
///
/// Type directories are the `php`, `server` and `tool` children of the
/// software root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardDirs {
    core_dir: PathBuf,
    user_core_dir: PathBuf,
    software_root: PathBuf,
}

impl StandardDirs {
    /// Create a layout with the software root at `<user_core_dir>/software`.
    pub fn new(core_dir: impl Into<PathBuf>, user_core_dir: impl Into<PathBuf>) -> Self {
        let user_core_dir = user_core_dir.into();
        let software_root = user_core_dir.join(SoftwareDirConfig::SOFTWARE_DIR_NAME);
        Self {
            core_dir: core_dir.into(),
            user_core_dir,
            software_root,
        }
    }

    /// Override the software root.
    pub fn with_software_root(mut self, software_root: impl Into<PathBuf>) -> Self {
        self.software_root = software_root.into();
        self
    }

    pub fn software_root(&self) -> &Path {
        &self.software_root
    }
}

impl AppDirs for StandardDirs {
    fn core_dir(&self) -> PathBuf {
        self.core_dir.clone()
    }

    fn user_core_dir(&self) -> PathBuf {
        self.user_core_dir.clone()
    }

    fn php_type_dir(&self) -> PathBuf {
        self.software_root.join(SoftwareDirConfig::PHP_DIR_NAME)
    }

    fn server_type_dir(&self) -> PathBuf {
        self.software_root.join(SoftwareDirConfig::SERVER_DIR_NAME)
    }

    fn tool_type_dir(&self) -> PathBuf {
        self.software_root.join(SoftwareDirConfig::TOOL_DIR_NAME)
    }

    fn software_root_dir(&self) -> PathBuf {
        self.software_root.clone()
    }
}
