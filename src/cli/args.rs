//! CLI argument definitions.

use crate::config::Strategy;
use crate::piece::PieceKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate black and white chess piece SVG variants.
#[derive(Debug, Parser)]
#[command(name = "svgpieces")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file (default: platform config directory).
    #[arg(long, global = true, env = "SVGPIECES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Options for conversion.
    #[command(flatten)]
    pub convert: ConvertArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List piece kinds with their source and output file names.
    Pieces,
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the conversion run.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Directory containing pawn.svg, knight.svg, ...
    #[arg(short, long, env = "SVGPIECES_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Directory to write bP.svg, wP.svg, ... into.
    #[arg(short, long, env = "SVGPIECES_TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Recoloring strategy.
    #[arg(long, value_enum, env = "SVGPIECES_STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Only convert these pieces (comma-separated names or codes, e.g. pawn,N).
    #[arg(short, long = "piece", value_delimiter = ',')]
    pub pieces: Option<Vec<PieceKind>>,

    /// Print the run summary as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
