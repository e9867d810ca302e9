//! Software catalogs.
//!
//! A catalog is a JSON array of [`SoftwareItem`] records. Two catalogs are
//! read: the bundled one under the core dir and an optional user override
//! under the user core dir (`custom/software/software.json`).

mod loader;
mod schema;

pub use loader::{CatalogLoader, CatalogSource};
pub use schema::{SoftwareItem, SoftwareType};
