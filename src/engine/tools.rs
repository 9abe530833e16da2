//! Path and filter utilities

use std::path::{Path, PathBuf};

/// Check if a file should be excluded based on OS-specific hidden files
pub fn is_os_hidden_file(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        match name {
            // macOS
            ".DS_Store" | ".AppleDouble" | ".LSOverride" => true,
            // Windows
            "Thumbs.db" | "ehthumbs.db" | "Desktop.ini" => true,
            // Linux
            ".directory" => true,
            _ => {
                // macOS resource fork files start with ._
                name.starts_with("._")
            }
        }
    } else {
        false
    }
}

/// True when `path` ends in `.{extension}` exactly (case-sensitive, no leading dot in `extension`).
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Returns true if `path` is a discovery candidate: not hidden OS metadata, right extension.
pub fn should_include_in_discovery(path: &Path, extension: &str) -> bool {
    !is_os_hidden_file(path) && has_extension(path, extension)
}

/// `<output_dir>/<source stem>.<extension>`.
pub fn output_path_for(source: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    let mut name = stem;
    name.push(".");
    name.push(extension);
    output_dir.join(name)
}

/// Strip a leading dot so `.docx` and `docx` configure the same thing.
pub fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_string()
}
