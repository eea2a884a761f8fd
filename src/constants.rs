//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "svgpieces";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default directory holding the source piece icons.
pub const DEFAULT_SOURCE_DIR: &str = "raw_pieces";

/// Default directory receiving the colored variants.
pub const DEFAULT_TARGET_DIR: &str = "assets/pieces";

/// Extension of source and output icons.
pub const SVG_EXTENSION: &str = "svg";

/// Element local-name suffixes treated as shapes by the XML strategy.
///
/// Matching is by suffix so prefixed or namespaced tags are covered.
pub const SHAPE_TAGS: [&str; 5] = ["path", "circle", "rect", "polygon", "ellipse"];

/// Default style of the white variant.
pub mod white {
    /// Fill color.
    pub const FILL: &str = "#ffffff";
    /// Outline color.
    pub const STROKE: &str = "#000000";
    /// Outline width, suited to a 50x50 view box.
    pub const STROKE_WIDTH: &str = "2";
}

/// Default style of the black variant.
pub mod black {
    /// Fill color.
    pub const FILL: &str = "#000000";
    /// Outline color.
    pub const STROKE: &str = "#ffffff";
    /// Thin outline separating the piece from dark squares.
    pub const STROKE_WIDTH: &str = "0.5";
}

/// Default stroke line join for both variants.
pub const DEFAULT_STROKE_LINEJOIN: &str = "round";

/// Outline width injected by the text strategy.
pub const DEFAULT_TEXT_OUTLINE_WIDTH: &str = "10";

/// Characters a color or width value may not contain.
///
/// The text strategy splices values straight into markup.
pub const FORBIDDEN_VALUE_CHARS: [char; 3] = ['"', '<', '>'];
