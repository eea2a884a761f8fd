//! Pipeline coordination across all pieces.

use crate::error::{Error, Result};
use crate::output::{ConversionSummary, PieceReport, progress};
use crate::piece::{PieceColor, PieceKind, output_file_name};
use crate::pipeline::process_piece;
use crate::recolor::Recolorer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory holding the source icons.
    pub source_dir: PathBuf,
    /// Directory receiving the colored variants.
    pub target_dir: PathBuf,
    /// Pieces to convert, in order.
    pub pieces: Vec<PieceKind>,
    /// Whether to show a progress bar.
    pub progress_enabled: bool,
}

impl ConvertOptions {
    /// Options converting every piece, without a progress bar.
    pub fn new(source_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            pieces: PieceKind::ALL.to_vec(),
            progress_enabled: false,
        }
    }
}

/// Path of the source icon for a piece.
pub fn source_path_for(source_dir: &Path, kind: PieceKind) -> PathBuf {
    source_dir.join(kind.source_file_name())
}

/// Path of the colored output for a piece.
pub fn output_path_for(target_dir: &Path, kind: PieceKind, color: PieceColor) -> PathBuf {
    target_dir.join(output_file_name(kind, color))
}

/// Create the target directory and any missing parents.
pub fn prepare_target_dir(target_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(target_dir).map_err(|e| Error::OutputDirCreateFailed {
        path: target_dir.to_path_buf(),
        source: e,
    })
}

/// Convert every selected piece and collect the outcomes.
///
/// Only failing to create the target directory is fatal. Missing, malformed
/// or unwritable pieces are logged and recorded in the summary.
pub fn convert_all(options: &ConvertOptions, recolorer: &dyn Recolorer) -> Result<ConversionSummary> {
    info!(
        "Processing SVGs from '{}' ({} strategy)",
        options.source_dir.display(),
        recolorer.strategy()
    );

    prepare_target_dir(&options.target_dir)?;
    debug!("Writing variants to '{}'", options.target_dir.display());

    let pb = progress::create_piece_progress(options.pieces.len(), options.progress_enabled);

    let mut pieces = Vec::with_capacity(options.pieces.len());
    for &kind in &options.pieces {
        let outcome = process_piece(kind, options, recolorer);
        pieces.push(PieceReport { kind, outcome });
        progress::inc_progress(pb.as_ref());
    }

    progress::finish_progress(pb, "Complete");

    Ok(ConversionSummary::new(
        recolorer.strategy(),
        &options.source_dir,
        &options.target_dir,
        pieces,
    ))
}
