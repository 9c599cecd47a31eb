//! Diagnostics for catalog entries that would render poorly or not at all.
//!
//! Rendering never fails on these; an entry with an unknown `type` is simply
//! absent from the page. This pass makes such losses visible so the CLI can
//! warn about them or, in strict mode, refuse to publish.

use crate::catalog::identity::{Category, Toolchain};
use crate::catalog::model::{CatalogEntry, entry_label};
use std::collections::BTreeMap;

pub fn validate_entries(entries: &[CatalogEntry]) -> Vec<String> {
    // Collect everything instead of stopping at the first problem so one run
    // surfaces the whole list.
    let mut errors = Vec::new();
    let mut first_seen: BTreeMap<(&Category, &str), usize> = BTreeMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let label = entry_label(index, Some(entry.image.as_str()));
        match &entry.category {
            None => errors.push(format!(
                "{label} has no type and will not appear on the page"
            )),
            Some(Category::Other(tag)) => errors.push(format!(
                "{label} has unknown type '{tag}' and will not appear on the page"
            )),
            Some(category) => {
                let key = (category, entry.image.as_str());
                if let Some(first) = first_seen.get(&key) {
                    errors.push(format!(
                        "{label} duplicates catalog entry {first} in the {} table",
                        category.heading()
                    ));
                } else {
                    first_seen.insert(key, index);
                }
            }
        }
        if let Toolchain::Other(path) = &entry.toolchain {
            errors.push(format!(
                "{label} has unrecognized toolchain '{path}'; its Toolchain cell will be empty"
            ));
        }
    }
    errors
}
