//! Text encoding of export records as `Grh` lines
//!
//! ```text
//! Grh<N>=1-<sheet>-<column>-<row>-<tile width>-<tile height>
//! Grh<N>=<frame count>-<frame 1>-...-<frame n>-<frame delay>
//! ```

use std::fmt;

use crate::export::records::{ExportConfig, ExportRecord, compile_records};
use crate::io::configuration::GRAPHIC_FRAME_COUNT;
use crate::spatial::{GridConfig, Selection};

impl fmt::Display for ExportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graphic {
                index,
                sheet,
                tile,
                tile_width,
                tile_height,
            } => write!(
                f,
                "Grh{index}={GRAPHIC_FRAME_COUNT}-{sheet}-{}-{}-{tile_width}-{tile_height}",
                tile.column, tile.row
            ),
            Self::Animation {
                index,
                frames,
                frame_delay,
            } => {
                write!(f, "Grh{index}={}", frames.len())?;
                for frame in frames {
                    write!(f, "-{frame}")?;
                }
                write!(f, "-{frame_delay}")
            }
        }
    }
}

/// Join records into newline-separated lines, without a trailing newline
pub fn encode_records(records: &[ExportRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compile and encode a selection
///
/// Returns `None` when nothing is selected, so callers can skip the write
/// entirely instead of producing an empty export.
pub fn compile_export(
    selection: &Selection,
    grid: &GridConfig,
    export: &ExportConfig,
) -> Option<String> {
    if selection.is_empty() {
        return None;
    }

    let records = compile_records(selection, grid, export);
    tracing::debug!(
        graphics = selection.len(),
        animations = records.len() - selection.len(),
        "compiled export"
    );
    Some(encode_records(&records))
}
