//! txtdocx: parallel batch conversion of plain-text files to `.docx`, plus a zip → JSON
//! corpus aggregator.

pub mod convert;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod unite;
pub mod utils;

/// Re-export types for API
pub use convert::RunEvent;
pub use error::ConvertError;
pub use types::*;

use crate::engine::report::{ConsoleReporter, print_summary};

/// Result alias used by public txtdocx API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point for the converter: convert every matching file under `opts.input_dir`.
///
/// - **`on_event: None`** → console mode. Each result is printed as it completes, followed by
///   the summary block (and a progress bar when `opts.progress`). Used by the CLI.
/// - **`on_event: Some(f)`** → `f` receives [`RunEvent`]s; nothing is printed. Called from
///   the driver thread, so keep it fast.
///
/// Returns `Err` for run-level failures only (e.g. the input directory does not exist).
/// Per-file failures are counted in the returned [`RunReport`].
pub fn convert_dir<F>(opts: &ConvertOpts, on_event: Option<F>) -> Result<RunOutcome>
where
    F: FnMut(&RunEvent),
{
    match on_event {
        Some(f) => convert::run_convert(opts, f),
        None => {
            let mut reporter = ConsoleReporter::new(opts.progress);
            let outcome = convert::run_convert(opts, |e| reporter.on_event(e));
            reporter.finish();
            let outcome = outcome?;
            match &outcome {
                RunOutcome::NoInputs => println!(
                    "No .{} files found in '{}'.",
                    engine::normalize_extension(&opts.input_extension),
                    opts.input_dir.display()
                ),
                RunOutcome::Completed(report) => print_summary(&report.summary),
            }
            Ok(outcome)
        }
    }
}

/// Merge the text of every `.zip` in `opts.input_dir` into one JSON file.
pub fn unite_dir(opts: &UniteOpts) -> Result<UniteSummary> {
    unite::run_unite(opts)
}
