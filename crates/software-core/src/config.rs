//! Centralized configuration for the software registry.
//!
//! This module provides the directory and file names that make up the
//! catalog layout under the core and user directories.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Software Registry";
    /// Directory name under the platform data dir used for user-writable state.
    pub const APP_DATA_DIR_NAME: &'static str = "software-registry";
}

/// Catalog file layout.
pub struct CatalogConfig;

impl CatalogConfig {
    /// Bundled catalog directory, relative to the core dir.
    pub const BASE_DIR: &'static str = "config/software";
    /// User override catalog directory, relative to the user core dir.
    pub const CUSTOM_DIR: &'static str = "custom/software";
    pub const CATALOG_FILENAME: &'static str = "software.json";
    pub const ICON_DIR_NAME: &'static str = "icon";
    /// Scheme prefixed to rewritten icon locators.
    pub const ICON_URL_SCHEME: &'static str = "file://";
}

/// Software directory layout.
pub struct SoftwareDirConfig;

impl SoftwareDirConfig {
    /// Software root, relative to the user core dir.
    pub const SOFTWARE_DIR_NAME: &'static str = "software";
    pub const PHP_DIR_NAME: &'static str = "php";
    pub const SERVER_DIR_NAME: &'static str = "server";
    pub const TOOL_DIR_NAME: &'static str = "tool";
}
