//! Software catalog loader.
//!
//! Loads the bundled catalog and the optional user override catalog and
//! concatenates them, base entries first.

use super::schema::SoftwareItem;
use crate::config::CatalogConfig;
use crate::error::{Result, SoftwareError};
use crate::platform::{icon_locator, AppDirs, FileSystem};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Location of one catalog file and the icon directory its entries refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSource {
    /// Path to the `software.json` file.
    pub config_path: PathBuf,
    /// Directory the entries' `Icon` file names are relative to.
    pub icon_dir: PathBuf,
}

impl CatalogSource {
    fn in_dir(dir: PathBuf) -> Self {
        Self {
            config_path: dir.join(CatalogConfig::CATALOG_FILENAME),
            icon_dir: dir.join(CatalogConfig::ICON_DIR_NAME),
        }
    }

    /// The bundled catalog under the core dir.
    pub fn base(dirs: &dyn AppDirs) -> Self {
        Self::in_dir(dirs.base_catalog_dir())
    }

    /// The user override catalog under the user core dir.
    pub fn custom(dirs: &dyn AppDirs) -> Self {
        Self::in_dir(dirs.custom_catalog_dir())
    }
}

/// Reads and merges the software catalogs.
pub struct CatalogLoader {
    fs: Arc<dyn FileSystem>,
    dirs: Arc<dyn AppDirs>,
}

impl CatalogLoader {
    pub fn new(fs: Arc<dyn FileSystem>, dirs: Arc<dyn AppDirs>) -> Self {
        Self { fs, dirs }
    }

    /// Load the merged catalog.
    ///
    /// The base catalog must exist. The override catalog is skipped when
    /// absent. Either file failing to read or parse yields
    /// [`SoftwareError::Config`] naming that file.
    pub async fn load(&self) -> Result<Vec<SoftwareItem>> {
        let base = CatalogSource::base(self.dirs.as_ref());
        let mut items = self.read_catalog(&base).await?;
        let base_count = items.len();

        let custom = CatalogSource::custom(self.dirs.as_ref());
        if self.fs.exists(&custom.config_path).await {
            items.extend(self.read_catalog(&custom).await?);
        } else {
            debug!(
                "No custom software catalog at {}",
                custom.config_path.display()
            );
        }

        info!(
            "Loaded {} software entries ({} bundled, {} custom)",
            items.len(),
            base_count,
            items.len() - base_count
        );

        Ok(items)
    }

    /// Read one catalog file and rewrite its icons against `source.icon_dir`.
    async fn read_catalog(&self, source: &CatalogSource) -> Result<Vec<SoftwareItem>> {
        let content = self
            .fs
            .read_all(&source.config_path)
            .await
            .map_err(|e| SoftwareError::config(&source.config_path, e))?;

        let items: Vec<SoftwareItem> = serde_json::from_str(&content)
            .map_err(|e| SoftwareError::config(&source.config_path, e))?;

        debug!(
            "Parsed {} entries from {}",
            items.len(),
            source.config_path.display()
        );

        Ok(items
            .into_iter()
            .map(|mut item| {
                if !item.software_type.is_recognized() {
                    warn!(
                        "{} in {} has unrecognized type '{}'",
                        item.name,
                        source.config_path.display(),
                        item.software_type
                    );
                }
                item.icon = icon_locator(&source.icon_dir, &item.icon);
                item
            })
            .collect())
    }
}
