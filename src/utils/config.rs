//! Application configuration constants.
//! Defaults and tuning in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived file names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
    temp_suffix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
                temp_suffix: format!("{pkg}.tmp"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Config file looked up in the working directory (`.txtdocx.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    /// Suffix appended to an output path while its document is being written.
    pub fn temp_suffix(&self) -> &str {
        &self.temp_suffix
    }
}

// ---- Defaults ----

/// Built-in values used when neither the CLI nor the config file set an option.
pub struct Defaults;

impl Defaults {
    pub const INPUT_DIR: &'static str = "novel";
    pub const OUTPUT_DIR: &'static str = "output";
    pub const INPUT_EXTENSION: &'static str = "txt";
    pub const OUTPUT_EXTENSION: &'static str = "docx";
    pub const ARCHIVE_EXTENSION: &'static str = "zip";
    pub const UNITED_JSON: &'static str = "united.json";
}

// ---- Worker threads ----

/// Worker pool sizing.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Available threads (from rayon); set by [`WorkerThreadLimits::current()`].
    pub all_threads: usize,
    /// Never run with fewer workers than this.
    pub floor: usize,
}

impl Default for WorkerThreadLimits {
    fn default() -> Self {
        Self {
            all_threads: 0, // use current() to set from rayon
            floor: Self::FLOOR_THREADS,
        }
    }
}

impl WorkerThreadLimits {
    pub const FLOOR_THREADS: usize = 1;

    /// Build limits with `all_threads` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            all_threads: rayon::current_num_threads(),
            ..Self::default()
        }
    }
}

// ---- Document layout ----

/// Fixed paragraph formatting applied to every converted line.
pub struct DocumentConsts;

impl DocumentConsts {
    /// Space after each paragraph, in points.
    pub const SPACE_AFTER_PT: u32 = 6;
    /// Word measures spacing in twentieths of a point.
    pub const TWIPS_PER_PT: u32 = 20;
    /// Buffer in front of the output file while streaming the container.
    pub const WRITE_BUFFER_SIZE: usize = 64 * 1024;
}

// ---- JSON output ----

/// Indentation used when pretty-printing the united corpus.
pub const JSON_INDENT: &[u8] = b"    ";
