//! Bundled JSON Schema for catalog entries.
//!
//! The schema ships inside the binary so strict runs behave the same no matter
//! where the catalog lives. It is stricter than the loader: `demo` must be a
//! boolean and `type` must name one of the five page sections.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

use crate::catalog::model::entry_label;

pub const ENTRY_SCHEMA_SOURCE: &str =
    include_str!("../schema/function_catalog_entry.schema.json");

/// Parse and compile the bundled entry schema.
pub(crate) fn load_entry_schema() -> Result<JSONSchema> {
    let raw: Value =
        serde_json::from_str(ENTRY_SCHEMA_SOURCE).context("parsing bundled entry schema")?;
    JSONSchema::compile(&raw).map_err(|err| anyhow!("compiling bundled entry schema: {err}"))
}

/// Validate raw catalog records against the entry schema.
///
/// Every violation across every entry is reported in one error so a catalog
/// can be fixed in a single pass.
pub fn validate_catalog_values(values: &[Value]) -> Result<()> {
    let schema = load_entry_schema()?;
    let mut details = Vec::new();
    for (index, value) in values.iter().enumerate() {
        if let Err(errors) = schema.validate(value) {
            let label = entry_label(index, value.get("image").and_then(Value::as_str));
            details.extend(errors.map(|err| format!("{label}: {err}")));
        }
    }
    if !details.is_empty() {
        bail!(
            "function catalog failed schema validation:\n{}",
            details.join("\n")
        );
    }
    Ok(())
}
