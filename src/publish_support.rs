//! Writing and checking the generated catalog page.
//!
//! Writes go through a temp file in the destination directory and are
//! renamed into place, so an interrupted run leaves the previous page intact.

use anyhow::{Context, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// How an on-disk page compares to a fresh render.
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Compare the page at `path` with `rendered` byte for byte.
pub fn document_freshness(path: &Path, rendered: &str) -> Result<Freshness> {
    match fs::read(path) {
        Ok(existing) if existing == rendered.as_bytes() => Ok(Freshness::UpToDate),
        Ok(_) => Ok(Freshness::Stale),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(Freshness::Missing),
        Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
    }
}

/// Atomically replace the page at `path` with `rendered`.
pub fn write_document(path: &Path, rendered: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    staged
        .write_all(rendered.as_bytes())
        .with_context(|| format!("writing temp file for {}", path.display()))?;
    staged
        .persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("replacing {}", path.display()))?;
    info!(path = %path.display(), bytes = rendered.len(), "wrote catalog page");
    Ok(())
}
