//! Cached software list and lookups.

use crate::catalog::{CatalogLoader, SoftwareItem, SoftwareType};
use crate::error::Result;
use crate::platform::{AppDirs, FileSystem};
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

/// Population state of the registry cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing loaded yet, every load so far has failed, or the merged
    /// catalog was empty.
    Empty,
    /// The merged catalog is cached for the lifetime of the registry.
    Populated,
}

/// Registry of known software, backed by the merged catalogs.
///
/// The catalogs are read on first use and cached once the merged list is
/// non-empty; the cache is never invalidated. Concurrent first callers are
/// serialized behind a single load. A failed load or an empty merged list
/// leaves the cache empty so the next call loads again.
pub struct SoftwareRegistry {
    loader: CatalogLoader,
    pub(crate) fs: Arc<dyn FileSystem>,
    pub(crate) dirs: Arc<dyn AppDirs>,
    list: OnceCell<Vec<SoftwareItem>>,
    /// Held while a load is in flight.
    load_lock: Mutex<()>,
}

impl SoftwareRegistry {
    /// Create a registry over the given collaborators.
    pub fn new(fs: Arc<dyn FileSystem>, dirs: Arc<dyn AppDirs>) -> Self {
        Self {
            loader: CatalogLoader::new(fs.clone(), dirs.clone()),
            fs,
            dirs,
            list: OnceCell::new(),
            load_lock: Mutex::new(()),
        }
    }

    /// Create a builder for SoftwareRegistry.
    pub fn builder(core_dir: impl Into<std::path::PathBuf>) -> super::SoftwareRegistryBuilder {
        super::SoftwareRegistryBuilder::new(core_dir)
    }

    /// Directory layout this registry resolves against.
    pub fn app_dirs(&self) -> &dyn AppDirs {
        self.dirs.as_ref()
    }

    pub fn cache_state(&self) -> CacheState {
        if self.list.initialized() {
            CacheState::Populated
        } else {
            CacheState::Empty
        }
    }

    /// Get the merged software list, loading the catalogs on first use.
    pub async fn get_list(&self) -> Result<&[SoftwareItem]> {
        if let Some(list) = self.list.get() {
            return Ok(list.as_slice());
        }

        let _guard = self.load_lock.lock().await;
        // Another caller may have finished loading while we waited
        if let Some(list) = self.list.get() {
            return Ok(list.as_slice());
        }

        debug!("Software list not cached, loading catalogs");
        let items = self.loader.load().await?;
        if items.is_empty() {
            debug!("Merged software catalog is empty, not caching");
            return Ok(&[]);
        }

        // Only written under `load_lock`, so the cell is still unset here
        let _ = self.list.set(items);
        Ok(self.list.get().map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Find the first entry named `name`.
    pub async fn find_item(&self, name: &str) -> Result<Option<&SoftwareItem>> {
        Ok(self.get_list().await?.iter().find(|item| item.name == name))
    }

    /// All entries of one category, in list order.
    pub async fn get_items_by_type(
        &self,
        software_type: &SoftwareType,
    ) -> Result<Vec<&SoftwareItem>> {
        Ok(self
            .get_list()
            .await?
            .iter()
            .filter(|item| &item.software_type == software_type)
            .collect())
    }

    /// Entries whose install directory currently exists.
    pub async fn get_installed_list(&self) -> Result<Vec<&SoftwareItem>> {
        let mut installed = Vec::new();
        for item in self.get_list().await? {
            if self.is_installed(item).await {
                installed.push(item);
            }
        }
        Ok(installed)
    }
}
