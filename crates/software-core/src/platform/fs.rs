//! File system access used by the registry.

use crate::error::{Result, SoftwareError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Minimal async file system surface.
///
/// The registry only ever checks for existence and reads whole files, so
/// tests can substitute an in-memory implementation.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Check whether a file or directory exists at `path`.
    async fn exists(&self, path: &Path) -> bool;

    /// Read the whole file at `path` as UTF-8.
    async fn read_all(&self, path: &Path) -> Result<String>;
}

/// [`FileSystem`] backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

#[async_trait]
impl FileSystem for TokioFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_all(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SoftwareError::io_with_path(e, path))
    }
}

/// In-memory [`FileSystem`] that counts every call.
///
/// A path exists if it is a file, a created directory, or an ancestor of
/// either.
///
/// Exported so callers can drive a [`SoftwareRegistry`](crate::SoftwareRegistry)
/// in their own tests without touching disk.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    entries: Mutex<MemoryEntries>,
    read_calls: AtomicUsize,
    exists_calls: AtomicUsize,
}

#[derive(Debug, Default)]
struct MemoryEntries {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, MemoryEntries> {
        // A panicking writer cannot leave the maps half-updated
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create or replace a file.
    pub fn write_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.entries().files.insert(path.into(), content.into());
    }

    /// Remove a file, returning its previous content.
    pub fn remove_file(&self, path: &Path) -> Option<String> {
        self.entries().files.remove(path)
    }

    pub fn create_dir(&self, path: impl Into<PathBuf>) {
        self.entries().dirs.insert(path.into());
    }

    pub fn remove_dir(&self, path: &Path) -> bool {
        self.entries().dirs.remove(path)
    }

    /// Number of `read_all` calls so far.
    pub fn read_count(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    /// Number of `exists` calls so far.
    pub fn exists_count(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        let entries = self.entries();
        entries.files.keys().any(|file| file.starts_with(path))
            || entries.dirs.iter().any(|dir| dir.starts_with(path))
    }

    async fn read_all(&self, path: &Path) -> Result<String> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.entries().files.get(path).cloned().ok_or_else(|| {
            SoftwareError::io_with_path(
                std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                path,
            )
        })
    }
}
