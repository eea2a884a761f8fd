//! Where svgpieces looks for its config file, and directory identity checks.

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::{Component, Path, PathBuf};

/// Platform directory holding `config.toml`.
///
/// - Linux: `~/.config/svgpieces/`
/// - macOS: `~/Library/Application Support/svgpieces/`
/// - Windows: `%APPDATA%\svgpieces\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Platform path of the svgpieces config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// The config file a run should use: `--config` if given, else the platform file.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(config_file_path, |path| Ok(path.to_path_buf()))
}

/// Whether two directory paths name the same directory.
///
/// Existing directories are compared by canonical path, so symlinks and `..`
/// are resolved. Otherwise both are made absolute and `.` components dropped,
/// which makes `raw`, `./raw` and `raw/.` equal.
pub fn same_directory(a: &Path, b: &Path) -> bool {
    if let (Ok(a), Ok(b)) = (a.canonicalize(), b.canonicalize()) {
        return a == b;
    }
    lexically_normalized(a) == lexically_normalized(b)
}

fn lexically_normalized(path: &Path) -> PathBuf {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
