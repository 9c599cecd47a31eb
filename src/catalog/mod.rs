//! Function catalog wiring.
//!
//! This module wraps the `catalog.json` records the page is generated from.
//! Types here mirror the catalog fields; `validate_entries` reports entries
//! that the renderer would silently drop or decorate incompletely.

pub mod identity;
pub mod model;
pub mod validation;

pub use identity::{Category, Toolchain};
pub use model::{CatalogEntry, decode_entries, decode_entry, load_catalog_from_path};
pub use validation::validate_entries;
