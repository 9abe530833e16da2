//! Archive aggregation: every `.zip` in a directory → one JSON corpus.
//!
//! Output shape: `{ "<archive>.zip": { "<entry file name>": "<text>", ... }, ... }`, keys sorted.

use anyhow::{Context, Result};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::pipeline::discover_sources;
use crate::types::display_name;
use crate::utils::config::{Defaults, JSON_INDENT};
use crate::{UniteOpts, UniteSummary};

/// Entry file name → text, for one archive.
pub type ArchiveContents = BTreeMap<String, String>;

/// Archive file name → its contents.
pub type UnitedCorpus = BTreeMap<String, ArchiveContents>;

/// Read every non-directory entry of the archive at `path` as UTF-8 text, keyed by file name.
/// A later entry with the same file name replaces an earlier one.
pub fn read_archive(path: &Path) -> Result<ArchiveContents> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("read zip archive {}", path.display()))?;

    let mut contents = ArchiveContents::new();
    for idx in 0..archive.len() {
        let mut entry = archive
            .by_index(idx)
            .with_context(|| format!("inspect entry #{idx}"))?;
        if entry.is_dir() {
            continue;
        }
        let name = match entry_file_name(entry.name()) {
            Some(n) => n,
            None => continue,
        };
        let mut text = String::new();
        entry
            .read_to_string(&mut text)
            .with_context(|| format!("read entry `{}`", entry.name()))?;
        contents.insert(name, text);
    }
    Ok(contents)
}

/// Last path component of a zip entry name (either separator).
pub fn entry_file_name(name: &str) -> Option<String> {
    name.rsplit(&['/', '\\'][..])
        .next()
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

/// Serialize `corpus` with 4-space indentation; non-ASCII is written as-is.
pub fn write_corpus(corpus: &UnitedCorpus, out: &Path) -> Result<()> {
    let file = File::create(out).with_context(|| format!("create {}", out.display()))?;
    let mut writer = BufWriter::new(file);
    let mut ser =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(JSON_INDENT));
    corpus
        .serialize(&mut ser)
        .with_context(|| format!("write {}", out.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", out.display()))?;
    Ok(())
}

/// Merge every archive in `opts.input_dir` into `<output_dir>/<output_name>`.
/// Archives that fail to read are logged and left out.
pub fn run_unite(opts: &UniteOpts) -> Result<UniteSummary> {
    let archives = discover_sources(&opts.input_dir, Defaults::ARCHIVE_EXTENSION)?;
    std::fs::create_dir_all(&opts.output_dir).with_context(|| {
        format!("create output directory '{}'", opts.output_dir.display())
    })?;

    let read: Vec<(PathBuf, Result<ArchiveContents>)> = archives
        .par_iter()
        .map(|a| (a.path.clone(), read_archive(a.path())))
        .collect();

    let mut corpus = UnitedCorpus::new();
    let mut skipped = Vec::new();
    for (path, contents) in read {
        println!("Processing {}...", path.display());
        match contents {
            Ok(contents) => {
                corpus.insert(display_name(&path), contents);
            }
            Err(e) => {
                warn!("Skipping {}: {:#}", path.display(), e);
                skipped.push((path, format!("{:#}", e)));
            }
        }
    }

    let output_path = opts.output_dir.join(&opts.output_name);
    write_corpus(&corpus, &output_path)?;
    println!("Combined JSON saved to {}", output_path.display());
    info!(
        "{} archive(s) merged, {} skipped",
        corpus.len(),
        skipped.len()
    );

    Ok(UniteSummary {
        archives_found: archives.len(),
        archives_merged: corpus.len(),
        skipped,
        output_path,
    })
}
