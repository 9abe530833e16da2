//! Discovery: list the direct children of the input directory that carry the wanted extension.

use anyhow::{Result, bail};
use log::warn;
use std::path::Path;
use walkdir::WalkDir;

use crate::SourceFile;
use crate::engine::tools::should_include_in_discovery;

/// Sorted list of regular files directly under `dir` ending in `.{extension}`.
///
/// Errors when `dir` does not exist or is not a directory. Unreadable entries are logged and
/// skipped.
pub fn discover_sources(dir: &Path, extension: &str) -> Result<Vec<SourceFile>> {
    if !dir.is_dir() {
        bail!("Input directory '{}' does not exist.", dir.display());
    }
    let mut sources = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && should_include_in_discovery(entry.path(), extension)
                {
                    sources.push(SourceFile::new(entry.into_path()));
                }
            }
            Err(err) => warn!("Skipping unreadable entry: {}", err),
        }
    }
    Ok(sources)
}
