//! Error types for svgpieces.

/// Result type alias for svgpieces operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for svgpieces.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Unknown piece name or code.
    #[error("unknown piece: {value}")]
    UnknownPiece {
        /// The unrecognized value.
        value: String,
    },

    /// Failed to read a source SVG.
    #[error("failed to read source SVG '{path}'")]
    SourceRead {
        /// Path to the source file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Source SVG is not well-formed XML.
    #[error("malformed SVG: {reason}")]
    MalformedSvg {
        /// Description of the parse failure.
        reason: String,
    },

    /// Failed to serialize a recolored SVG.
    #[error("failed to serialize SVG: {reason}")]
    SvgSerialize {
        /// Description of the serialization failure.
        reason: String,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output SVG.
    #[error("failed to write output file '{path}'")]
    OutputWrite {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the conversion summary.
    #[error("failed to serialize summary")]
    SummarySerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
