//! Catalog record schema.
//!
//! Defines the structure of the records in a `software.json` catalog.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category of a software entry, selecting its base directory family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SoftwareType {
    /// PHP runtimes.
    Php,
    /// Server software (web servers, databases, ...).
    Server,
    /// General tools.
    Tool,
    /// Any other `Type` string, kept verbatim.
    Unrecognized(String),
}

impl SoftwareType {
    pub fn as_str(&self) -> &str {
        match self {
            SoftwareType::Php => "PHP",
            SoftwareType::Server => "Server",
            SoftwareType::Tool => "Tool",
            SoftwareType::Unrecognized(raw) => raw,
        }
    }

    /// Parse a raw `Type` value. Matching is exact.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PHP" => SoftwareType::Php,
            "Server" => SoftwareType::Server,
            "Tool" => SoftwareType::Tool,
            other => SoftwareType::Unrecognized(other.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, SoftwareType::Unrecognized(_))
    }
}

impl From<String> for SoftwareType {
    fn from(raw: String) -> Self {
        match SoftwareType::parse(&raw) {
            SoftwareType::Unrecognized(_) => SoftwareType::Unrecognized(raw),
            known => known,
        }
    }
}

impl From<SoftwareType> for String {
    fn from(software_type: SoftwareType) -> Self {
        match software_type {
            SoftwareType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for SoftwareType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One described software package.
///
/// Constructed only by the catalog loader, after which `icon` holds an
/// absolute `file://` locator instead of the catalog's relative file name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SoftwareItem {
    /// Display name; not guaranteed unique across catalogs.
    pub name: String,
    #[serde(rename = "Type")]
    pub software_type: SoftwareType,
    /// Install directory name under the type directory.
    pub dir_name: String,
    pub icon: String,
    /// Config file, relative to the install path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf_path: Option<String>,
    /// Server config file, relative to the install path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_conf_path: Option<String>,
    /// Server executable, relative to the install path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_process_path: Option<String>,
    /// Remaining catalog keys, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
