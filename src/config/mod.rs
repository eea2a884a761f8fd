//! Configuration loading and management.

mod file;
mod paths;
mod types;
mod validate;

pub use file::{load_config, load_config_file, save_config};
pub use paths::{config_dir, config_file_path, resolve_config_path, same_directory};
pub use types::{Config, DefaultsConfig, Strategy, StyleConfig, TextConfig, VariantStyle};
pub use validate::{validate_config, validate_style};
