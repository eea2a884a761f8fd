//! Run summary reporting.

use crate::error::{Error, Result};
use crate::output::ConversionSummary;
use tracing::{info, warn};

/// Log the final counts of a run.
pub fn log_summary(summary: &ConversionSummary) {
    info!(
        "Complete: {} converted, {} skipped, {} failed, {} file(s) written to '{}'",
        summary.converted,
        summary.skipped,
        summary.failed,
        summary.files_written,
        summary.target_dir.display()
    );

    if summary.failed > 0 {
        warn!("{} piece(s) had errors", summary.failed);
    }
}

/// Render the summary as pretty-printed JSON.
pub fn summary_json(summary: &ConversionSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).map_err(|e| Error::SummarySerialize { source: e })
}
