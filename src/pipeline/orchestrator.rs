use anyhow::{Result, anyhow, bail};
use log::debug;
use std::thread::JoinHandle;

use crate::pipeline::{self, PoolHandles, PoolTuning, WorkerContext};
use crate::utils::config::WorkerThreadLimits;
use crate::utils::fd_limit::max_workers_by_fd_limit;
use crate::{ConversionResult, SourceFile};

/// Pool size: requested (or core count), capped by FD limit and job count, at least the floor.
pub fn pool_tuning(requested: Option<usize>, job_count: usize) -> PoolTuning {
    let limits = WorkerThreadLimits::current();
    let wanted = requested.unwrap_or(limits.all_threads);
    let num_workers = match max_workers_by_fd_limit() {
        Some(fd_cap) if fd_cap < wanted => {
            debug!("Capping workers {} -> {} (FD limit ~80%)", wanted, fd_cap);
            fd_cap
        }
        _ => wanted,
    };
    let num_workers = num_workers.min(job_count).max(limits.floor);
    PoolTuning {
        num_workers,
        channel_cap: job_count.max(1),
    }
}

/// Spawn the workers and enqueue every source. Caller drains `result_rx` then joins.
pub fn start_pool(
    sources: Vec<SourceFile>,
    ctx: &WorkerContext,
    tuning: &PoolTuning,
) -> Result<PoolHandles> {
    let channels = pipeline::create_pool_channels(tuning.channel_cap);

    let worker_handles = pipeline::spawn_convert_workers(
        channels.job_rx,
        &channels.result_tx,
        ctx,
        tuning.num_workers,
    );

    // Dropping the last sender closes the channel so the driver's receive loop ends.
    drop(channels.result_tx);

    let submitted = sources.len();
    for source in sources {
        channels
            .job_tx
            .send(source)
            .map_err(|_| anyhow!("all workers exited before accepting work"))?;
    }
    // No more jobs: workers exit once the queue is empty.
    drop(channels.job_tx);

    Ok(PoolHandles {
        result_rx: channels.result_rx,
        worker_handles,
        submitted,
    })
}

/// Join worker threads (after the result stream is drained).
pub fn shutdown_pool(worker_handles: Vec<JoinHandle<()>>) -> Result<()> {
    let panicked = worker_handles
        .into_iter()
        .map(JoinHandle::join)
        .filter(|r| r.is_err())
        .count();
    if panicked > 0 {
        bail!("{} worker thread(s) panicked", panicked);
    }
    Ok(())
}

/// Receive results in completion order, handing each to `on_result` as it arrives.
/// Fails if a worker panicked or a result went missing.
pub fn collect_results<F>(handles: PoolHandles, mut on_result: F) -> Result<Vec<ConversionResult>>
where
    F: FnMut(&ConversionResult),
{
    let PoolHandles {
        result_rx,
        worker_handles,
        submitted,
    } = handles;

    let mut results = Vec::with_capacity(submitted);
    while let Ok(result) = result_rx.recv() {
        on_result(&result);
        results.push(result);
    }
    debug!("result channel closed, {} of {} results", results.len(), submitted);

    shutdown_pool(worker_handles)?;
    if results.len() != submitted {
        bail!(
            "expected {} results but received {}",
            submitted,
            results.len()
        );
    }
    Ok(results)
}

/// Fan `sources` out to the pool and fan the results back in.
/// Jobs → job channel → workers (convert) → result channel → Vec.
pub fn run_pool<F>(
    sources: Vec<SourceFile>,
    ctx: &WorkerContext,
    tuning: &PoolTuning,
    on_result: F,
) -> Result<Vec<ConversionResult>>
where
    F: FnMut(&ConversionResult),
{
    let handles = start_pool(sources, ctx, tuning)?;
    collect_results(handles, on_result)
}
