//! Install and configuration path derivation.

use super::SoftwareRegistry;
use crate::catalog::{CatalogSource, SoftwareItem, SoftwareType};
use crate::error::{Result, SoftwareError};
use crate::platform::join_relative;
use std::path::PathBuf;

impl SoftwareRegistry {
    /// Whether the software root directory exists.
    pub async fn dir_exists(&self) -> bool {
        self.fs.exists(&self.dirs.software_root_dir()).await
    }

    /// Whether `item`'s install directory currently exists.
    pub async fn is_installed(&self, item: &SoftwareItem) -> bool {
        self.fs.exists(&self.get_path(item)).await
    }

    /// Install directory of `item`.
    ///
    /// An unrecognized type has an empty base, so the result is `dir_name`
    /// on its own.
    pub fn get_path(&self, item: &SoftwareItem) -> PathBuf {
        join_relative(&self.get_type_path(&item.software_type), &item.dir_name)
    }

    /// Config file of `item`.
    pub fn get_conf_path(&self, item: &SoftwareItem) -> Result<PathBuf> {
        self.resolve_in_install_dir(item, item.conf_path.as_deref(), "ConfPath")
    }

    /// Server config file of `item`.
    pub fn get_server_conf_path(&self, item: &SoftwareItem) -> Result<PathBuf> {
        self.resolve_in_install_dir(item, item.server_conf_path.as_deref(), "ServerConfPath")
    }

    /// Server executable of `item`.
    pub fn get_server_process_path(&self, item: &SoftwareItem) -> Result<PathBuf> {
        self.resolve_in_install_dir(
            item,
            item.server_process_path.as_deref(),
            "ServerProcessPath",
        )
    }

    /// Base directory for a software category.
    pub fn get_type_path(&self, software_type: &SoftwareType) -> PathBuf {
        match software_type {
            SoftwareType::Php => self.dirs.php_type_dir(),
            SoftwareType::Server => self.dirs.server_type_dir(),
            SoftwareType::Tool => self.dirs.tool_type_dir(),
            SoftwareType::Unrecognized(_) => PathBuf::new(),
        }
    }

    /// Icon directory of the bundled catalog.
    pub fn get_icon_path(&self) -> PathBuf {
        CatalogSource::base(self.dirs.as_ref()).icon_dir
    }

    fn resolve_in_install_dir(
        &self,
        item: &SoftwareItem,
        relative: Option<&str>,
        field: &'static str,
    ) -> Result<PathBuf> {
        let relative = relative.ok_or_else(|| SoftwareError::MissingField {
            item_name: item.name.clone(),
            field,
        })?;
        Ok(join_relative(&self.get_path(item), relative))
    }
}
