//! Pool context and tuning: channels and sizing shared by the driver and the workers.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::PathBuf;
use std::thread::JoinHandle;

use crate::{ConversionResult, SourceFile};

/// Pool sizing derived from config, core count and FD limit.
#[derive(Clone, Debug)]
pub struct PoolTuning {
    pub num_workers: usize,
    /// Capacity of the job and result channels. At least the job count so the driver
    /// can enqueue everything without blocking.
    pub channel_cap: usize,
}

/// What each worker needs besides its channels.
#[derive(Clone, Debug)]
pub struct WorkerContext {
    pub output_dir: PathBuf,
    pub output_extension: String,
}

/// Job channel (driver → workers) and result channel (workers → driver).
pub struct PoolChannels {
    pub job_tx: Sender<SourceFile>,
    pub job_rx: Receiver<SourceFile>,
    pub result_tx: Sender<ConversionResult>,
    pub result_rx: Receiver<ConversionResult>,
}

pub fn create_pool_channels(channel_cap: usize) -> PoolChannels {
    let (job_tx, job_rx) = bounded::<SourceFile>(channel_cap);
    let (result_tx, result_rx) = bounded::<ConversionResult>(channel_cap);
    PoolChannels {
        job_tx,
        job_rx,
        result_tx,
        result_rx,
    }
}

/// Handles returned by [`start_pool`](crate::pipeline::start_pool): receive results, then join.
pub struct PoolHandles {
    pub result_rx: Receiver<ConversionResult>,
    pub worker_handles: Vec<JoinHandle<()>>,
    /// Number of jobs enqueued; the driver must see exactly this many results.
    pub submitted: usize,
}
