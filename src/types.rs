//! Public and internal types for the txtdocx API and pipeline.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConvertError;
use crate::utils::config::Defaults;

/// A plain-text input found by discovery. Identified by its path; never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceFile {
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display (`a.txt`); falls back to the full path.
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Outcome of converting one [`SourceFile`]. Exactly one is produced per source.
#[derive(Debug)]
pub enum ConversionResult {
    Success { source: PathBuf, output: PathBuf },
    Failure { source: PathBuf, error: ConvertError },
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success { .. })
    }

    pub fn source(&self) -> &Path {
        match self {
            ConversionResult::Success { source, .. } | ConversionResult::Failure { source, .. } => {
                source
            }
        }
    }

    /// Human-readable line printed as soon as the result arrives.
    pub fn message(&self) -> String {
        match self {
            ConversionResult::Success { source, output } => format!(
                "Successfully converted {} to {}",
                display_name(source),
                display_name(output)
            ),
            ConversionResult::Failure { source, error } => {
                format!("Error converting {}: {}", display_name(source), error)
            }
        }
    }
}

/// Aggregate counts and wall-clock time for one converter run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub total: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Fold a result into the counts.
    pub fn record(&mut self, result: &ConversionResult) {
        if result.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Everything a completed run produced: summary plus each result in completion order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub summary: RunSummary,
    pub results: Vec<ConversionResult>,
}

/// How a converter run ended when no infrastructure error occurred.
#[derive(Debug)]
pub enum RunOutcome {
    /// Discovery found nothing to convert; no output directory was created.
    NoInputs,
    Completed(RunReport),
}

/// Options for the batch converter.
#[derive(Clone, Debug)]
pub struct ConvertOpts {
    /// Directory scanned (non-recursively) for inputs.
    pub input_dir: PathBuf,
    /// Directory documents are written to. Created when missing.
    pub output_dir: PathBuf,
    /// Worker pool size. When None, uses the available core count.
    pub workers: Option<usize>,
    /// Extension (without dot) an input must have. Case-sensitive.
    pub input_extension: String,
    /// Extension (without dot) given to each output document.
    pub output_extension: String,
    /// Debug-level logging.
    pub verbose: bool,
    /// Show a progress bar while converting (console mode only).
    pub progress: bool,
}

impl Default for ConvertOpts {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(Defaults::INPUT_DIR),
            output_dir: PathBuf::from(Defaults::OUTPUT_DIR),
            workers: None,
            input_extension: Defaults::INPUT_EXTENSION.to_string(),
            output_extension: Defaults::OUTPUT_EXTENSION.to_string(),
            verbose: false,
            progress: false,
        }
    }
}

/// Options for the archive aggregator.
#[derive(Clone, Debug)]
pub struct UniteOpts {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// File name of the combined JSON written into `output_dir`.
    pub output_name: String,
    pub verbose: bool,
}

impl Default for UniteOpts {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(Defaults::INPUT_DIR),
            output_dir: PathBuf::from(Defaults::OUTPUT_DIR),
            output_name: Defaults::UNITED_JSON.to_string(),
            verbose: false,
        }
    }
}

/// Result of [`unite_dir`](crate::unite_dir).
#[derive(Clone, Debug, Default)]
pub struct UniteSummary {
    pub archives_found: usize,
    pub archives_merged: usize,
    /// Archives left out of the output, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
    pub output_path: PathBuf,
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
