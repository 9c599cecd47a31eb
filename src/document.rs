//! Assembles the Functions Catalog page.
//!
//! Everything except the five category tables is fixed text: the front
//! matter, the generated-file banner, the introduction, the section prose,
//! and the reference link definitions the prose points at.

use crate::catalog::{CatalogEntry, Category};
use crate::render::render_table;
use tracing::info;

/// Command recorded in the generated-file banner.
pub const GENERATED_BY: &str = "cd catalog; catalog-docs --catalog catalog.json";

const FRONT_MATTER: &str = r#"---
title: "Functions Catalog"
linkTitle: "Functions Catalog"
weight: 6
type: docs
description: >
    Catalog of Config Functions.
---"#;

const INTRODUCTION: &str = "\
This repository documents a catalog of functions implementing the
[Configuration Functions Specification][spec].

Run functions either imperatively or declaratively by following the
[Functions User Guide].

Implement configuration functions using any toolchain such as the
[Typescript SDK][ts sdk] or [Golang Libraries][go libs].";

const NEXT_STEPS: &str = "\
## Next Steps

- Learn more ways of using the kpt fn command from the [reference] doc.
- Get a quickstart on writing functions from the [function producer docs].";

const LINK_DEFINITIONS: &str = "\
[spec]: https://github.com/kubernetes-sigs/kustomize/blob/master/cmd/config/docs/api-conventions/functions-spec.md
[Functions User Guide]: ../
[ts sdk]: ../../../producer/functions/ts/
[go libs]: ../../../producer/functions/golang/
[source]: ../../../../concepts/functions/#source-function
[sink]: ../../../../concepts/functions/#sink-function
[reference]: ../../../../reference/fn/run/
[function producer docs]: ../../../producer/functions/";

// Prose under a section heading; only sources and sinks link to a definition.
fn section_intro(category: &Category) -> Option<&'static str> {
    match category {
        Category::Source => Some("See [definition of source functions][source]."),
        Category::Sink => Some("See [definition of sink functions][sink]."),
        _ => None,
    }
}

/// Render the complete catalog page, ending with a single newline.
///
/// Sections always appear in `Category::ALL` order, even when empty, so the
/// page layout does not depend on the catalog contents.
pub fn render_document(entries: &[CatalogEntry]) -> String {
    let mut blocks: Vec<String> = vec![
        FRONT_MATTER.to_string(),
        format!("<!---\nDO NOT EDIT. Generated by: \"{GENERATED_BY}\"\n-->"),
        INTRODUCTION.to_string(),
    ];

    for category in Category::ALL {
        blocks.push(format!("## {}", category.heading()));
        if let Some(intro) = section_intro(&category) {
            blocks.push(intro.to_string());
        }
        blocks.push(render_table(entries, &category));
    }

    blocks.push(NEXT_STEPS.to_string());
    blocks.push(LINK_DEFINITIONS.to_string());

    info!(entries = entries.len(), "rendered functions catalog page");
    let mut document = blocks.join("\n\n");
    document.push('\n');
    document
}
