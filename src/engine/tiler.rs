//! Tiler session state with explicit change tracking
//!
//! Holds everything the grid view depends on: image size, grid, display
//! transform, export settings and the selection. Every mutation that changes
//! what the overlay would look like bumps a revision counter, so a caller
//! redraws by comparing revisions instead of relying on implicit reactivity.
//!
//! Selection lifetime rules:
//! - Loading an image clears the selection
//! - Changing the tile size clears the selection
//! - Moving the grid offset keeps the selection, since tiles are identified
//!   by index and not by pixel position

use image::RgbaImage;

use crate::export::{ExportConfig, ExportRecord, compile_export, compile_records};
use crate::io::configuration::{
    DEFAULT_FRAME_DELAY, DEFAULT_GRAPHIC_SHEET, DEFAULT_OFFSET, DEFAULT_STARTING_INDEX,
    DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
};
use crate::io::overlay::render_overlay;
use crate::spatial::geometry::pixel_to_tile;
use crate::spatial::{DisplayTransform, GridConfig, Selection, TileCoordinate};

/// What to do with tiles outside `[0, columns) x [0, rows)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfGridPolicy {
    /// Treat them as opaque indices and select them like any other tile
    #[default]
    Accept,
    /// Drop them without touching the selection
    Ignore,
}

/// Result of a toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The tile is now selected
    Selected,
    /// The tile is no longer selected
    Deselected,
    /// The tile was outside the grid and the policy dropped it
    Ignored,
}

/// User-facing settings, before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilerSettings {
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Horizontal grid offset in pixels
    pub offset_x: i32,
    /// Vertical grid offset in pixels
    pub offset_y: i32,
    /// Graphic sheet number
    pub graphic: u32,
    /// Requested frame delay, clamped to `1..=4`
    pub frame_delay: i64,
    /// Requested starting index, clamped to at least 1
    pub initial_index: i64,
}

impl TilerSettings {
    /// Export part of the settings, clamped
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig::new(self.graphic, self.frame_delay, self.initial_index)
    }
}

impl Default for TilerSettings {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            offset_x: DEFAULT_OFFSET,
            offset_y: DEFAULT_OFFSET,
            graphic: DEFAULT_GRAPHIC_SHEET,
            frame_delay: i64::from(DEFAULT_FRAME_DELAY),
            initial_index: i64::from(DEFAULT_STARTING_INDEX),
        }
    }
}

/// One image with its grid and selection
#[derive(Debug, Clone)]
pub struct ImageTiler {
    grid: GridConfig,
    container: Option<(u32, u32)>,
    transform: DisplayTransform,
    export: ExportConfig,
    selection: Selection,
    policy: OutOfGridPolicy,
    revision: u64,
    rendered_revision: Option<u64>,
}

impl ImageTiler {
    /// Start a session for an image of the given pixel size
    pub fn new(image_width: u32, image_height: u32, settings: &TilerSettings) -> Self {
        let grid = GridConfig::new(
            settings.tile_width,
            settings.tile_height,
            image_width,
            image_height,
        )
        .with_offset(settings.offset_x, settings.offset_y);

        Self {
            grid,
            container: None,
            transform: DisplayTransform::identity(image_width, image_height),
            export: settings.export_config(),
            selection: Selection::new(),
            policy: OutOfGridPolicy::default(),
            revision: 0,
            rendered_revision: None,
        }
    }

    /// Replace the source image; the selection is cleared
    pub fn load_image(&mut self, image_width: u32, image_height: u32) {
        self.grid.image_width = image_width;
        self.grid.image_height = image_height;
        self.selection.clear();
        self.refresh_transform();
        self.touch();
        tracing::debug!(image_width, image_height, "image loaded, selection cleared");
    }

    /// Change the tile size; the selection is cleared if the size differs
    pub fn set_tile_size(&mut self, tile_width: u32, tile_height: u32) {
        if (self.grid.tile_width, self.grid.tile_height) == (tile_width, tile_height) {
            return;
        }
        self.grid.tile_width = tile_width;
        self.grid.tile_height = tile_height;
        self.selection.clear();
        self.touch();
        tracing::debug!(tile_width, tile_height, "tile size changed, selection cleared");
    }

    /// Move the grid; the selection is kept
    pub fn set_offset(&mut self, offset_x: i32, offset_y: i32) {
        if (self.grid.offset_x, self.grid.offset_y) == (offset_x, offset_y) {
            return;
        }
        self.grid = self.grid.with_offset(offset_x, offset_y);
        self.touch();
    }

    /// Set the size of the display container the image is fitted into
    pub fn set_container(&mut self, container_width: u32, container_height: u32) {
        self.container = Some((container_width, container_height));
        self.refresh_transform();
        self.touch();
    }

    /// Replace the export settings; the overlay is unaffected
    pub const fn set_export_config(&mut self, export: ExportConfig) {
        self.export = export;
    }

    /// Choose how out-of-grid tiles are handled
    pub const fn set_out_of_grid_policy(&mut self, policy: OutOfGridPolicy) {
        self.policy = policy;
    }

    /// Flip a tile's membership, subject to the out-of-grid policy
    pub fn toggle(&mut self, tile: TileCoordinate) -> ToggleOutcome {
        if !self.grid.contains(tile) {
            match self.policy {
                OutOfGridPolicy::Ignore => {
                    tracing::debug!(%tile, "ignoring out-of-grid tile");
                    return ToggleOutcome::Ignored;
                }
                OutOfGridPolicy::Accept => {
                    tracing::debug!(%tile, "selecting out-of-grid tile");
                }
            }
        }

        self.touch();
        if self.selection.toggle(tile) {
            ToggleOutcome::Selected
        } else {
            ToggleOutcome::Deselected
        }
    }

    /// Toggle the tile under a display-space pointer position
    ///
    /// `container_origin` is the display-space position of the canvas'
    /// top-left corner.
    pub fn click(&mut self, pointer: [f64; 2], container_origin: [f64; 2]) -> (TileCoordinate, ToggleOutcome) {
        let tile = pixel_to_tile(pointer, container_origin, &self.grid, &self.transform);
        (tile, self.toggle(tile))
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.touch();
        }
    }

    /// Current selection compiled to export records
    pub fn records(&self) -> Vec<ExportRecord> {
        compile_records(&self.selection, &self.grid, &self.export)
    }

    /// Export text for the clipboard, or `None` when nothing is selected
    pub fn copy_to_clipboard(&self) -> Option<String> {
        compile_export(&self.selection, &self.grid, &self.export)
    }

    /// Draw the overlay for the current state and mark it as rendered
    pub fn render(&mut self, base: &RgbaImage) -> RgbaImage {
        let overlay = render_overlay(base, &self.grid, &self.selection);
        self.rendered_revision = Some(self.revision);
        overlay
    }

    /// Whether the state changed since the last [`render`](Self::render)
    pub fn needs_redraw(&self) -> bool {
        self.rendered_revision != Some(self.revision)
    }

    /// Counter bumped by every change that affects the overlay
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Current grid
    pub const fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Current display transform
    pub const fn transform(&self) -> &DisplayTransform {
        &self.transform
    }

    /// Current export settings
    pub const fn export_config(&self) -> &ExportConfig {
        &self.export
    }

    /// Current selection
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    fn refresh_transform(&mut self) {
        let (image_width, image_height) = (self.grid.image_width, self.grid.image_height);
        self.transform = match self.container {
            Some((width, height)) => DisplayTransform::fit(image_width, image_height, width, height),
            None => DisplayTransform::identity(image_width, image_height),
        };
    }

    const fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
