//! Pipeline components: discovery, pool context, workers, driver.

pub mod context;
pub mod discover;
pub mod orchestrator;
pub mod workers;

pub use context::{PoolChannels, PoolHandles, PoolTuning, WorkerContext, create_pool_channels};
pub use discover::discover_sources;
pub use orchestrator::{collect_results, pool_tuning, run_pool, shutdown_pool, start_pool};
pub use workers::spawn_convert_workers;
