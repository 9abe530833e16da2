use crossbeam_channel::{Receiver, Sender};
use log::debug;
use std::thread::{self, JoinHandle};

use crate::engine::txt_to_docx::convert_file;
use crate::{ConversionResult, SourceFile};

use super::context::WorkerContext;

/// Single conversion worker: take jobs from job_rx until it closes, send each result on result_tx.
fn convert_worker_loop(
    worker_id: usize,
    job_rx: Receiver<SourceFile>,
    result_tx: Sender<ConversionResult>,
    ctx: WorkerContext,
) {
    let mut done = 0_usize;
    while let Ok(source) = job_rx.recv() {
        let result = convert_file(source.path(), &ctx.output_dir, &ctx.output_extension);
        if result_tx.send(result).is_err() {
            break;
        }
        done += 1;
    }
    debug!("worker {} finished after {} files", worker_id, done);
    drop(result_tx);
}

/// Spawn `num_workers` conversion threads. Caller must drop its own result sender after this so
/// the result channel closes once every worker exits.
pub fn spawn_convert_workers(
    job_rx: Receiver<SourceFile>,
    result_tx: &Sender<ConversionResult>,
    ctx: &WorkerContext,
    num_workers: usize,
) -> Vec<JoinHandle<()>> {
    (0..num_workers)
        .map(|worker_id| {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            let ctx = ctx.clone();
            thread::spawn(move || convert_worker_loop(worker_id, job_rx, result_tx, ctx))
        })
        .collect()
}
