//! Shared library for the Functions Catalog page generator.
//!
//! The crate turns the records in `catalog.json` into the markdown catalog
//! page: entries are grouped by category, projected into six-column tables,
//! and interpolated into a fixed page template. Rendering is pure; loading,
//! validation and writing live in separate helpers used by `catalog-docs`.

use anyhow::{Context, Result, bail};
use serde_json::Value;

pub mod catalog;
pub mod document;
pub mod publish_support;
pub mod render;
pub mod schema_loader;
pub mod table;

pub use catalog::{
    CatalogEntry, Category, Toolchain, decode_entries, load_catalog_from_path, validate_entries,
};
pub use document::render_document;
pub use publish_support::{Freshness, document_freshness, write_document};
pub use render::{entry_row, render_table};
pub use schema_loader::validate_catalog_values;
pub use table::MarkdownTable;

/// Split catalog input into raw records, accepting a JSON array, a single
/// object, or NDJSON.
///
/// Empty input is an error. NDJSON is parsed line by line so the error names
/// the line that failed.
pub fn parse_catalog_values(input: &str) -> Result<Vec<Value>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("No catalog input provided");
    }

    // An array is never NDJSON; report its syntax error with serde's position.
    let parsed = if trimmed.starts_with('[') {
        Some(serde_json::from_str::<Value>(trimmed).context("Unable to parse catalog array")?)
    } else {
        serde_json::from_str::<Value>(trimmed).ok()
    };
    if let Some(value) = parsed {
        return match value {
            Value::Array(items) => Ok(items),
            Value::Object(_) => Ok(vec![value]),
            _ => bail!("Unsupported catalog input; expected an array or object of entries"),
        };
    }

    let mut records = Vec::new();
    for (idx, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: Value = serde_json::from_str(line)
            .with_context(|| format!("Unable to parse catalog entry from line {}", idx + 1))?;
        records.push(record);
    }

    if records.is_empty() {
        bail!("No catalog entries found in input");
    }

    Ok(records)
}

/// Parse catalog input into typed entries.
///
/// A record missing a required field fails the whole parse; the error names
/// the record's position and image.
pub fn parse_catalog(input: &str) -> Result<Vec<CatalogEntry>> {
    decode_entries(parse_catalog_values(input)?)
}
