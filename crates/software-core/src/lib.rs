//! Software Core - catalog of installable software and its install layout.
//!
//! This crate loads the bundled software catalog plus an optional user
//! override catalog, caches the merged list, and derives where each entry is
//! expected to live on disk. It never installs or launches anything.
//!
//! # Example
//!
//! ```rust,ignore
//! use software_core::SoftwareRegistry;
//!
//! #[tokio::main]
//! async fn main() -> software_core::Result<()> {
//!     let registry = SoftwareRegistry::builder("/opt/app/core").build()?;
//!
//!     if let Some(nginx) = registry.find_item("Nginx").await? {
//!         println!("nginx.conf: {}", registry.get_server_conf_path(nginx)?.display());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod platform;
pub mod registry;

// Re-export commonly used types
pub use catalog::{CatalogLoader, CatalogSource, SoftwareItem, SoftwareType};
pub use error::{Result, SoftwareError};
pub use platform::{AppDirs, FileSystem, MemoryFileSystem, StandardDirs, TokioFileSystem};
pub use registry::{CacheState, SoftwareRegistry, SoftwareRegistryBuilder};
