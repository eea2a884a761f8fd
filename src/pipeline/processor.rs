//! Single piece processing.

use crate::error::{Error, Result};
use crate::output::PieceOutcome;
use crate::piece::{PieceColor, PieceKind, output_file_name};
use crate::pipeline::{ConvertOptions, output_path_for, source_path_for};
use crate::recolor::Recolorer;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Convert one piece into its black and white variants.
///
/// Both variants are rendered before either is written, so a malformed
/// source leaves nothing behind in the target directory.
pub fn process_piece(
    kind: PieceKind,
    options: &ConvertOptions,
    recolorer: &dyn Recolorer,
) -> PieceOutcome {
    let source = source_path_for(&options.source_dir, kind);
    let source_name = kind.source_file_name();

    if !source.is_file() {
        warn!(
            "Skipping {source_name} (not found in {})",
            options.source_dir.display()
        );
        return PieceOutcome::SkippedMissing { source };
    }

    let content = match read_source(&source) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read {source_name}: {e}");
            return PieceOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };
    debug!("Read {} bytes from {}", content.len(), source.display());

    let mut rendered = Vec::with_capacity(PieceColor::ALL.len());
    for color in PieceColor::ALL {
        match recolorer.recolor(&content, color) {
            Ok(svg) => rendered.push((color, svg)),
            Err(Error::MalformedSvg { reason }) => {
                error!("Error parsing {source_name}: {reason}");
                return PieceOutcome::SkippedMalformed { source, reason };
            }
            Err(e) => {
                error!("Failed to recolor {source_name}: {e}");
                return PieceOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        }
    }

    let mut outputs = Vec::with_capacity(rendered.len());
    for (color, svg) in rendered {
        let path = output_path_for(&options.target_dir, kind, color);
        if let Err(e) = write_output(&path, &svg) {
            error!("{e}");
            return PieceOutcome::Failed {
                reason: e.to_string(),
            };
        }
        info!("Created {}", output_file_name(kind, color));
        outputs.push(path);
    }

    PieceOutcome::Converted { outputs }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_output(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg).map_err(|e| Error::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
