pub mod config;
pub mod fd_limit;
pub mod logger;
pub mod tempfiles;
pub mod txtdocx_toml;

pub use config::*;
pub use fd_limit::{FDS_PER_WORKER, max_open_fds, max_workers_by_fd_limit};
pub use logger::{Colors, setup_logging};
pub use tempfiles::{discard_temp, rename_temp_to_final, temp_path_for};
