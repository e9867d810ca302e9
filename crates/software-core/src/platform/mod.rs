//! Platform abstraction layer.
//!
//! The registry talks to the outside world only through this module:
//! - `app_dirs` - Base-directory resolution for the running installation
//! - `fs` - Existence checks and whole-file reads
//! - `paths` - Path composition and platform data directories

pub mod app_dirs;
pub mod fs;
pub mod paths;

// Re-export commonly used items
pub use self::app_dirs::{AppDirs, StandardDirs};
pub use self::fs::{FileSystem, MemoryFileSystem, TokioFileSystem};
pub use self::paths::{default_user_core_dir, icon_locator, join_relative};
