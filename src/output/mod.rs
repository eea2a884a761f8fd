//! Run reporting: outcomes, progress and summaries.

pub mod progress;
mod summary;
mod types;

pub use summary::{log_summary, summary_json};
pub use types::{ConversionSummary, PieceOutcome, PieceReport};
