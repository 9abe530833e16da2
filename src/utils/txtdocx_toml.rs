//! Load `.txtdocx.toml` (CLI only). The library never reads it; callers pass options directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::utils::config::PackagePaths;
use crate::{ConvertOpts, UniteOpts};

#[derive(Debug, Default, Deserialize)]
pub struct TxtdocxToml {
    #[serde(default)]
    convert: ConvertSection,
    #[serde(default)]
    unite: UniteSection,
}

#[derive(Debug, Default, Deserialize)]
struct ConvertSection {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    workers: Option<usize>,
    input_extension: Option<String>,
    output_extension: Option<String>,
    verbose: Option<bool>,
    progress: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct UniteSection {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    output_name: Option<String>,
    verbose: Option<bool>,
}

/// Load the config file. `explicit` wins over `.txtdocx.toml` in `dir`.
/// `Ok(None)` when the default file is absent; `Err` when a file exists but cannot be used
/// (or an explicit path is missing).
pub fn load_txtdocx_toml(dir: &Path, explicit: Option<&Path>) -> Result<Option<TxtdocxToml>> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(PackagePaths::get().config_filename()));
    if explicit.is_none() && !path.exists() {
        return Ok(None);
    }
    let s = std::fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    let file = parse_txtdocx_toml(&s).with_context(|| format!("parse config {}", path.display()))?;
    Ok(Some(file))
}

pub fn parse_txtdocx_toml(s: &str) -> std::result::Result<TxtdocxToml, toml::de::Error> {
    toml::from_str(s)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $field:ident) => {
        if let Some(v) = $sec.$field.clone() {
            $opts.$field = v;
        }
    };
}

/// Apply the `[convert]` section (only fields present in the file). Call before applying CLI.
pub fn apply_file_to_convert_opts(file: &TxtdocxToml, opts: &mut ConvertOpts) {
    let sec = &file.convert;
    apply_file_opt!(sec, opts, input_dir);
    apply_file_opt!(sec, opts, output_dir);
    if sec.workers.is_some() {
        opts.workers = sec.workers;
    }
    apply_file_opt!(sec, opts, input_extension);
    apply_file_opt!(sec, opts, output_extension);
    apply_file_opt!(sec, opts, verbose);
    apply_file_opt!(sec, opts, progress);
}

/// Apply the `[unite]` section (only fields present in the file). Call before applying CLI.
pub fn apply_file_to_unite_opts(file: &TxtdocxToml, opts: &mut UniteOpts) {
    let sec = &file.unite;
    apply_file_opt!(sec, opts, input_dir);
    apply_file_opt!(sec, opts, output_dir);
    apply_file_opt!(sec, opts, output_name);
    apply_file_opt!(sec, opts, verbose);
}
