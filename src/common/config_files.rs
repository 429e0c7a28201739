use std::path::{Path, PathBuf};

/// Resolve `relative_path` against the directory holding the settings file.
/// Absolute paths are returned unchanged.
pub fn resolve_config_path(settings_path: &Path, relative_path: &str) -> PathBuf {
    let candidate = Path::new(relative_path);
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }
    let base_dir = settings_path.parent().unwrap_or_else(|| Path::new("."));
    base_dir.join(candidate)
}

/// Make sure a file exists at `path`, writing `default_contents` if it does not.
/// Returns `true` when the file was created.
pub fn ensure_config_file(path: &Path, default_contents: &str) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, default_contents)?;
    Ok(true)
}
