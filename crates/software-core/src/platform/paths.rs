//! Platform-specific path utilities.
//!
//! This module provides:
//! - Relative path composition for catalog values
//! - The default user-writable data directory
//! - `file://` locators for icon files

use crate::config::{AppConfig, CatalogConfig};
use crate::error::{Result, SoftwareError};
use std::path::{Path, PathBuf};

/// Join `segment` onto `base` as a relative path.
///
/// Leading `/` and `\` separators are stripped from `segment` first, so a
/// catalog value such as `/conf/nginx.conf` stays inside `base` instead of
/// replacing it. An empty `base` yields `segment` unchanged, leading
/// separators included.
pub fn join_relative(base: &Path, segment: &str) -> PathBuf {
    if base.as_os_str().is_empty() {
        return PathBuf::from(segment);
    }
    let trimmed = segment.trim_start_matches(['/', '\\']);
    if trimmed.is_empty() {
        return base.to_path_buf();
    }
    base.join(trimmed)
}

/// Build a `file://` locator for `file_name` inside `icon_dir`.
pub fn icon_locator(icon_dir: &Path, file_name: &str) -> String {
    format!(
        "{}{}",
        CatalogConfig::ICON_URL_SCHEME,
        join_relative(icon_dir, file_name).display()
    )
}

/// Get the default user core directory.
///
/// # Platform Behavior
/// - **Linux**: `~/.local/share/software-registry` (XDG_DATA_HOME)
/// - **Windows**: `%APPDATA%\software-registry`
/// - **macOS**: `~/Library/Application Support/software-registry`
pub fn default_user_core_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        SoftwareError::Other("Could not determine platform data directory".to_string())
    })?;
    Ok(data_dir.join(AppConfig::APP_DATA_DIR_NAME))
}
