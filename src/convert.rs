//! Batch conversion: discover → create output dir → worker pool → summary.

use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

use crate::engine::tools::normalize_extension;
use crate::pipeline::{WorkerContext, discover_sources, pool_tuning, run_pool};
use crate::{ConversionResult, ConvertOpts, RunOutcome, RunReport, RunSummary};

/// Progress notifications handed to the caller while a run is in flight.
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// Discovery finished and the pool is about to start.
    Started { total: usize, workers: usize },
    /// One file finished (success or failure). Arrives in completion order.
    Converted(&'a ConversionResult),
}

/// Convert every matching file in `opts.input_dir`, reporting through `on_event`.
///
/// Returns `Err` only for run-level problems (missing input directory, output directory not
/// creatable, worker panic). Per-file failures are part of the returned report.
pub fn run_convert<F>(opts: &ConvertOpts, mut on_event: F) -> Result<RunOutcome>
where
    F: FnMut(&RunEvent),
{
    let start_time = Instant::now();
    let input_extension = normalize_extension(&opts.input_extension);
    let output_extension = normalize_extension(&opts.output_extension);

    let sources = discover_sources(&opts.input_dir, &input_extension)?;
    if sources.is_empty() {
        debug!(
            "No .{} files found in '{}'.",
            input_extension,
            opts.input_dir.display()
        );
        return Ok(RunOutcome::NoInputs);
    }

    std::fs::create_dir_all(&opts.output_dir).with_context(|| {
        format!("create output directory '{}'", opts.output_dir.display())
    })?;

    let total = sources.len();
    let tuning = pool_tuning(opts.workers, total);
    info!(
        "Found {} {} file(s). Starting conversion with up to {} parallel workers...",
        total,
        input_extension.to_uppercase(),
        tuning.num_workers
    );
    on_event(&RunEvent::Started {
        total,
        workers: tuning.num_workers,
    });

    let ctx = WorkerContext {
        output_dir: opts.output_dir.clone(),
        output_extension,
    };
    let mut summary = RunSummary {
        total,
        ..RunSummary::default()
    };
    let results = run_pool(sources, &ctx, &tuning, |result| {
        summary.record(result);
        on_event(&RunEvent::Converted(result));
    })?;
    summary.elapsed = start_time.elapsed();

    Ok(RunOutcome::Completed(RunReport { summary, results }))
}
