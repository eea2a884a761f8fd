//! Processing pipeline components.

mod coordinator;
mod processor;

pub use coordinator::{
    ConvertOptions, convert_all, output_path_for, prepare_target_dir, source_path_for,
};
pub use processor::process_piece;
