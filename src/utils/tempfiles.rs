use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::utils::config::PackagePaths;

/// Temp path a document is written to before it replaces `output_path`.
/// Same directory, so the final rename never crosses filesystems.
pub fn temp_path_for(output_path: &Path) -> PathBuf {
    let name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| PackagePaths::get().pkg_name().to_string());
    output_path
        .parent()
        .unwrap_or(Path::new("."))
        .join(format!(".{name}.{}", PackagePaths::get().temp_suffix()))
}

/// Move a finished temp file onto its final path, replacing any existing file.
pub fn rename_temp_to_final(temp_path: &Path, final_path: &Path) -> io::Result<()> {
    fs::rename(temp_path, final_path)
}

/// Best-effort removal of a temp file left by a failed write.
pub fn discard_temp(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path)
        && e.kind() != io::ErrorKind::NotFound
    {
        log::warn!("could not remove temp file {}: {}", temp_path.display(), e);
    }
}
