//! Compilation of a selection into numbered graphic and animation records
//!
//! Selected tiles are numbered in raster order starting at the configured
//! index. Each distinct row then yields one animation whose frames are that
//! row's graphics from left to right. Animations are numbered after the last
//! graphic, so the whole export is one contiguous index range.

use crate::io::configuration::{
    DEFAULT_FRAME_DELAY, DEFAULT_GRAPHIC_SHEET, DEFAULT_STARTING_INDEX, MAX_FRAME_DELAY,
    MIN_FRAME_DELAY, MIN_STARTING_INDEX,
};
use crate::spatial::{GridConfig, Selection, TileCoordinate};

/// Export settings that do not affect the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    graphic_sheet_id: u32,
    frame_delay: u8,
    starting_index: u32,
}

impl ExportConfig {
    /// Build a config, clamping the frame delay to `1..=4` and the starting index to at least 1
    pub fn new(graphic_sheet_id: u32, frame_delay: i64, starting_index: i64) -> Self {
        let clamped_delay = frame_delay.clamp(i64::from(MIN_FRAME_DELAY), i64::from(MAX_FRAME_DELAY));
        if clamped_delay != frame_delay {
            tracing::debug!(requested = frame_delay, used = clamped_delay, "frame delay clamped");
        }

        let clamped_index = starting_index.clamp(i64::from(MIN_STARTING_INDEX), i64::from(u32::MAX));
        if clamped_index != starting_index {
            tracing::debug!(requested = starting_index, used = clamped_index, "starting index clamped");
        }

        Self {
            graphic_sheet_id,
            frame_delay: u8::try_from(clamped_delay).unwrap_or(DEFAULT_FRAME_DELAY),
            starting_index: u32::try_from(clamped_index).unwrap_or(DEFAULT_STARTING_INDEX),
        }
    }

    /// Graphic sheet number referenced by every graphic line
    pub const fn graphic_sheet_id(&self) -> u32 {
        self.graphic_sheet_id
    }

    /// Animation speed in engine ticks per frame
    pub const fn frame_delay(&self) -> u8 {
        self.frame_delay
    }

    /// Index of the first emitted record
    pub const fn starting_index(&self) -> u32 {
        self.starting_index
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            graphic_sheet_id: DEFAULT_GRAPHIC_SHEET,
            frame_delay: DEFAULT_FRAME_DELAY,
            starting_index: DEFAULT_STARTING_INDEX,
        }
    }
}

/// One line of the export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRecord {
    /// A single static tile of the sheet
    Graphic {
        /// Record index
        index: u64,
        /// Graphic sheet the tile is cut from
        sheet: u32,
        /// Tile position in the grid
        tile: TileCoordinate,
        /// Tile width in pixels
        tile_width: u32,
        /// Tile height in pixels
        tile_height: u32,
    },

    /// An animation cycling through previously emitted graphics
    Animation {
        /// Record index
        index: u64,
        /// Graphic indices in playback order
        frames: Vec<u64>,
        /// Engine ticks per frame
        frame_delay: u8,
    },
}

impl ExportRecord {
    /// Record index
    pub const fn index(&self) -> u64 {
        match self {
            Self::Graphic { index, .. } | Self::Animation { index, .. } => *index,
        }
    }
}

/// Compile a selection into graphic records followed by one animation per row
///
/// Output depends only on the set of selected tiles, never on the order in
/// which they were toggled. An empty selection compiles to no records.
pub fn compile_records(
    selection: &Selection,
    grid: &GridConfig,
    export: &ExportConfig,
) -> Vec<ExportRecord> {
    let sorted = selection.sorted();
    let first_index = u64::from(export.starting_index());

    let mut records: Vec<ExportRecord> = sorted
        .iter()
        .zip(first_index..)
        .map(|(&tile, index)| ExportRecord::Graphic {
            index,
            sheet: export.graphic_sheet_id(),
            tile,
            tile_width: grid.tile_width,
            tile_height: grid.tile_height,
        })
        .collect();

    // Sorting makes each row one contiguous run
    let mut next_frame = first_index;
    let mut next_index = first_index + sorted.len() as u64;
    for row in sorted.chunk_by(|a, b| a.row == b.row) {
        let frame_count = row.len() as u64;
        records.push(ExportRecord::Animation {
            index: next_index,
            frames: (next_frame..next_frame + frame_count).collect(),
            frame_delay: export.frame_delay(),
        });
        next_frame += frame_count;
        next_index += 1;
    }

    records
}
