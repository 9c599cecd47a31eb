//! Deserializable representation of a `catalog.json` entry.
//!
//! Fields mirror the catalog records one-to-one. Required fields fail the load
//! when missing; optional fields degrade to "not set" so a single odd entry
//! never blocks rendering the page.

use crate::catalog::identity::{Category, Toolchain, value_text};
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Deserialize)]
/// One packaged configuration function listed in the catalog.
pub struct CatalogEntry {
    pub image: String,
    pub args: String,
    pub description: String,
    #[serde(default, deserialize_with = "strict_true")]
    pub demo: bool,
    #[serde(default, deserialize_with = "optional_text")]
    pub example: Option<String>,
    pub source: String,
    pub toolchain: Toolchain,
    #[serde(rename = "type", default)]
    pub category: Option<Category>,
}

impl CatalogEntry {
    /// True when the entry belongs to `category`.
    pub fn is_in(&self, category: &Category) -> bool {
        self.category.as_ref() == Some(category)
    }
}

// Only a literal JSON `true` marks a demo; "true", 1 and friends do not.
fn strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}

// Absent or null means no value; anything else renders as its text.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(value_text(&other)),
    })
}

/// Human-readable handle for an entry in diagnostics.
pub(crate) fn entry_label(index: usize, image: Option<&str>) -> String {
    match image {
        Some(image) if !image.is_empty() => format!("catalog entry {index} (image {image})"),
        _ => format!("catalog entry {index}"),
    }
}

/// Decode one raw catalog record, naming the entry on failure.
pub fn decode_entry(index: usize, value: Value) -> Result<CatalogEntry> {
    let label = entry_label(index, value.get("image").and_then(Value::as_str));
    serde_json::from_value(value).with_context(|| format!("Unable to parse {label}"))
}

/// Decode raw records in order, failing on the first malformed entry.
pub fn decode_entries(values: Vec<Value>) -> Result<Vec<CatalogEntry>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| decode_entry(index, value))
        .collect()
}

/// Read and parse a function catalog from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<Vec<CatalogEntry>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
    crate::parse_catalog(&data).with_context(|| format!("parsing catalog {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Value {
        json!({
            "image": "gcr.io/kpt-functions/kubeval",
            "args": "",
            "description": "Validates configuration",
            "source": "https://example.com/kubeval",
            "toolchain": "../../../producer/functions/ts/",
            "type": "validator"
        })
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let entry = decode_entry(0, base()).unwrap();
        assert!(!entry.demo);
        assert_eq!(entry.example, None);
        assert_eq!(entry.category, Some(Category::Validator));
        assert_eq!(entry.toolchain, Toolchain::TypescriptSdk);
    }

    #[test]
    fn demo_requires_literal_true() {
        for (raw, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!(0), false),
            (json!(1), false),
            (json!("true"), false),
            (Value::Null, false),
        ] {
            let mut value = base();
            value["demo"] = raw.clone();
            let entry = decode_entry(0, value).unwrap();
            assert_eq!(entry.demo, expected, "demo = {raw}");
        }
    }

    #[test]
    fn null_example_and_type_are_absent() {
        let mut value = base();
        value["example"] = Value::Null;
        value["type"] = Value::Null;
        let entry = decode_entry(0, value).unwrap();
        assert_eq!(entry.example, None);
        assert_eq!(entry.category, None);
        assert!(!entry.is_in(&Category::Validator));
    }

    #[test]
    fn non_string_type_and_example_degrade() {
        let mut odd = base();
        odd["image"] = json!("gcr.io/odd");
        odd["type"] = json!(5);
        odd["example"] = json!(7);
        let entries = decode_entries(vec![base(), odd]).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].category, Some(Category::Other("5".to_string())));
        assert!(!entries[1].is_in(&Category::Validator));
        assert_eq!(entries[1].example.as_deref(), Some("7"));

        let mut string_example = base();
        string_example["example"] = json!("https://example.com/demo");
        let entry = decode_entry(0, string_example).unwrap();
        assert_eq!(entry.example.as_deref(), Some("https://example.com/demo"));
    }

    #[test]
    fn missing_required_field_names_the_entry() {
        let mut value = base();
        value.as_object_mut().unwrap().remove("source");
        let err = decode_entry(4, value).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("catalog entry 4"), "{message}");
        assert!(message.contains("gcr.io/kpt-functions/kubeval"), "{message}");
        assert!(message.contains("source"), "{message}");
    }

    #[test]
    fn missing_image_falls_back_to_index() {
        let mut value = base();
        value.as_object_mut().unwrap().remove("image");
        let err = decode_entries(vec![base(), value]).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("catalog entry 1"), "{message}");
        assert!(!message.contains("(image"), "{message}");
    }
}
