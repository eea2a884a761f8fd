//! Configuration validation.

use crate::config::{Config, VariantStyle, same_directory};
use crate::constants::FORBIDDEN_VALUE_CHARS;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_defaults(config)?;
    validate_style("black", &config.style.black)?;
    validate_style("white", &config.style.white)?;
    validate_width("text.outline_width", &config.text.outline_width)?;
    Ok(())
}

/// Validate default settings.
fn validate_defaults(config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    if defaults.source_dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "source_dir must not be empty".to_string(),
        });
    }

    if defaults.target_dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "target_dir must not be empty".to_string(),
        });
    }

    // Black variants are copies of the sources under the text strategy
    if same_directory(&defaults.source_dir, &defaults.target_dir) {
        return Err(Error::ConfigValidation {
            message: format!(
                "source_dir and target_dir must differ, both are '{}'",
                defaults.source_dir.display()
            ),
        });
    }

    Ok(())
}

/// Validate one variant's presentation attributes.
pub fn validate_style(variant: &str, style: &VariantStyle) -> Result<()> {
    validate_value(&format!("style.{variant}.fill"), &style.fill)?;
    validate_value(&format!("style.{variant}.stroke"), &style.stroke)?;
    validate_value(
        &format!("style.{variant}.stroke_linejoin"),
        &style.stroke_linejoin,
    )?;
    validate_width(&format!("style.{variant}.stroke_width"), &style.stroke_width)
}

fn validate_value(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: format!("{field} must not be empty"),
        });
    }

    if value.contains(FORBIDDEN_VALUE_CHARS) {
        return Err(Error::ConfigValidation {
            message: format!("{field} contains a quote or angle bracket: {value:?}"),
        });
    }

    Ok(())
}

fn validate_width(field: &str, value: &str) -> Result<()> {
    validate_value(field, value)?;

    let width: f64 = value.trim().parse().map_err(|_| Error::ConfigValidation {
        message: format!("{field} must be a number, got {value:?}"),
    })?;

    if !width.is_finite() || width <= 0.0 {
        return Err(Error::ConfigValidation {
            message: format!("{field} must be positive, got {value}"),
        });
    }

    Ok(())
}
