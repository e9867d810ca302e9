//! Software registry.
//!
//! This module provides:
//! - **Lookups**: the cached merged catalog, queried by name or category
//! - **Path derivation**: install, config, server config and server
//!   executable paths, resolved against the item's type directory

mod builder;
mod paths;
mod software_registry;

pub use builder::SoftwareRegistryBuilder;
pub use software_registry::{CacheState, SoftwareRegistry};
