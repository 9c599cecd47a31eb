//! Per-category catalog tables.
//!
//! Each entry becomes a fixed six-cell row. Cell rules are independent: the
//! description gains a demo marker, optional links collapse to empty cells,
//! and only recognized toolchains get a labeled link.

use crate::catalog::{CatalogEntry, Category};
use crate::table::MarkdownTable;
use tracing::debug;

pub const HEADER: [&str; 6] = [
    "Image",
    "Args",
    "Description",
    "Example",
    "Source",
    "Toolchain",
];

pub const DEMO_PREFIX: &str = "[Demo] ";

/// Entries tagged `category`, in catalog order.
pub fn entries_in<'a>(
    entries: &'a [CatalogEntry],
    category: &'a Category,
) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
    entries.iter().filter(move |entry| entry.is_in(category))
}

/// Render the markdown table for one category, header included.
///
/// Entries from other categories, and entries with no category at all, are
/// skipped without comment; see `validate_entries` for reporting them.
pub fn render_table(entries: &[CatalogEntry], category: &Category) -> String {
    let mut table = MarkdownTable::new(HEADER);
    for entry in entries_in(entries, category) {
        table.push_row(entry_row(entry));
    }
    debug!(
        category = category.as_str(),
        rows = table.len(),
        "rendered catalog table"
    );
    table.render()
}

/// Display cells for one entry, in `HEADER` order.
pub fn entry_row(entry: &CatalogEntry) -> [String; 6] {
    [
        entry.image.clone(),
        entry.args.clone(),
        description_cell(entry),
        example_cell(entry),
        link("Source", &entry.source),
        toolchain_cell(entry),
    ]
}

fn description_cell(entry: &CatalogEntry) -> String {
    if entry.demo {
        format!("{DEMO_PREFIX}{}", entry.description)
    } else {
        entry.description.clone()
    }
}

fn example_cell(entry: &CatalogEntry) -> String {
    entry
        .example
        .as_deref()
        .map(|example| link("Example", example))
        .unwrap_or_default()
}

fn toolchain_cell(entry: &CatalogEntry) -> String {
    entry
        .toolchain
        .label()
        .map(|label| link(label, entry.toolchain.path()))
        .unwrap_or_default()
}

fn link(label: &str, target: &str) -> String {
    format!("[{label}]({target})")
}
