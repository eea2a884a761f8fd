//! Output type definitions.

use crate::config::Strategy;
use crate::piece::PieceKind;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to one piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PieceOutcome {
    /// Both variants were written.
    Converted {
        /// Written files, black first.
        outputs: Vec<PathBuf>,
    },
    /// Source icon does not exist.
    SkippedMissing {
        /// Expected source path.
        source: PathBuf,
    },
    /// Source icon is not well-formed XML.
    SkippedMalformed {
        /// Source path.
        source: PathBuf,
        /// Parser message.
        reason: String,
    },
    /// Reading or writing failed.
    Failed {
        /// Error message.
        reason: String,
    },
}

impl PieceOutcome {
    /// Files written for this piece.
    pub fn outputs(&self) -> &[PathBuf] {
        match self {
            Self::Converted { outputs } => outputs,
            _ => &[],
        }
    }
}

/// Outcome of one piece, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceReport {
    /// Piece kind.
    pub kind: PieceKind,
    /// What happened.
    #[serde(flatten)]
    pub outcome: PieceOutcome,
}

/// Result of a whole conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    /// Strategy used.
    pub strategy: Strategy,
    /// Source directory.
    pub source_dir: PathBuf,
    /// Target directory.
    pub target_dir: PathBuf,
    /// Pieces converted.
    pub converted: usize,
    /// Pieces skipped as missing or malformed.
    pub skipped: usize,
    /// Pieces that failed on I/O.
    pub failed: usize,
    /// Total files written.
    pub files_written: usize,
    /// Per-piece outcomes in processing order.
    pub pieces: Vec<PieceReport>,
}

impl ConversionSummary {
    /// Tally per-piece reports into a summary.
    pub fn new(
        strategy: Strategy,
        source_dir: &Path,
        target_dir: &Path,
        pieces: Vec<PieceReport>,
    ) -> Self {
        let mut converted = 0;
        let mut skipped = 0;
        let mut failed = 0;
        let mut files_written = 0;

        for report in &pieces {
            files_written += report.outcome.outputs().len();
            match &report.outcome {
                PieceOutcome::Converted { .. } => converted += 1,
                PieceOutcome::SkippedMissing { .. } | PieceOutcome::SkippedMalformed { .. } => {
                    skipped += 1;
                }
                PieceOutcome::Failed { .. } => failed += 1,
            }
        }

        Self {
            strategy,
            source_dir: source_dir.to_path_buf(),
            target_dir: target_dir.to_path_buf(),
            converted,
            skipped,
            failed,
            files_written,
            pieces,
        }
    }
}
