//! Configuration type definitions.

use crate::constants::{
    DEFAULT_SOURCE_DIR, DEFAULT_STROKE_LINEJOIN, DEFAULT_TARGET_DIR, DEFAULT_TEXT_OUTLINE_WIDTH,
    black, white,
};
use crate::piece::PieceColor;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default conversion settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Per-variant styles.
    #[serde(default)]
    pub style: StyleConfig,

    /// Text strategy settings.
    #[serde(default)]
    pub text: TextConfig,
}

/// Default conversion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Directory holding `pawn.svg`, `knight.svg`, ...
    pub source_dir: PathBuf,

    /// Directory receiving `bP.svg`, `wP.svg`, ...
    pub target_dir: PathBuf,

    /// Conversion strategy.
    pub strategy: Strategy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            strategy: Strategy::default(),
        }
    }
}

/// How source icons are recolored.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Regex substitution of fill values plus injected outline attributes.
    Text,
    /// Parse as XML and restyle shape elements.
    #[default]
    Xml,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Xml => write!(f, "xml"),
        }
    }
}

/// Presentation attributes applied to one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantStyle {
    /// `fill` attribute value.
    pub fill: String,
    /// `stroke` attribute value.
    pub stroke: String,
    /// `stroke-width` attribute value.
    pub stroke_width: String,
    /// `stroke-linejoin` attribute value.
    #[serde(default = "default_linejoin")]
    pub stroke_linejoin: String,
}

fn default_linejoin() -> String {
    DEFAULT_STROKE_LINEJOIN.to_string()
}

impl VariantStyle {
    /// Default white variant: white fill, black outline.
    pub fn white() -> Self {
        Self {
            fill: white::FILL.to_string(),
            stroke: white::STROKE.to_string(),
            stroke_width: white::STROKE_WIDTH.to_string(),
            stroke_linejoin: default_linejoin(),
        }
    }

    /// Default black variant: black fill, thin white outline.
    pub fn black() -> Self {
        Self {
            fill: black::FILL.to_string(),
            stroke: black::STROKE.to_string(),
            stroke_width: black::STROKE_WIDTH.to_string(),
            stroke_linejoin: default_linejoin(),
        }
    }

    /// Attribute name/value pairs in write order.
    pub fn attributes(&self) -> [(&'static str, &str); 4] {
        [
            ("fill", self.fill.as_str()),
            ("stroke", self.stroke.as_str()),
            ("stroke-width", self.stroke_width.as_str()),
            ("stroke-linejoin", self.stroke_linejoin.as_str()),
        ]
    }
}

/// Styles for both variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Black variant style.
    pub black: VariantStyle,
    /// White variant style.
    pub white: VariantStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            black: VariantStyle::black(),
            white: VariantStyle::white(),
        }
    }
}

impl StyleConfig {
    /// Style for the given color.
    pub const fn for_color(&self, color: PieceColor) -> &VariantStyle {
        match color {
            PieceColor::Black => &self.black,
            PieceColor::White => &self.white,
        }
    }
}

/// Text strategy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Stroke width injected into the white variant.
    pub outline_width: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            outline_width: DEFAULT_TEXT_OUTLINE_WIDTH.to_string(),
        }
    }
}
