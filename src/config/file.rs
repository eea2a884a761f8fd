//! Reading and writing the svgpieces TOML config.

use crate::config::{Config, config_file_path};
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Parse a config file into [`Config`].
///
/// A file that does not exist yields the built-in defaults, so a fresh
/// checkout converts `raw_pieces/` into `assets/pieces/` without any setup.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("No config at {}, using built-in defaults", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config a run should use.
///
/// `explicit` is the `--config` path. Without it the platform file is read,
/// and a platform with no config directory falls back to the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match config_file_path() {
        Ok(path) => load_config_file(&path),
        Err(e) => {
            debug!("{e}, using built-in defaults");
            Ok(Config::default())
        }
    }
}

/// Write `config` as pretty TOML, creating missing parent directories.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;

    std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
