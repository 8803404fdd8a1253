//! Grid and export defaults, clamping bounds and overlay styling

// Grid defaults
/// Default tile width in pixels
pub const DEFAULT_TILE_WIDTH: u32 = 32;
/// Default tile height in pixels
pub const DEFAULT_TILE_HEIGHT: u32 = 32;
/// Default horizontal and vertical grid offset
pub const DEFAULT_OFFSET: i32 = 0;

// Export defaults
/// Graphic sheet number used when none is given
pub const DEFAULT_GRAPHIC_SHEET: u32 = 0;
/// Frame count written on every static graphic line
pub const GRAPHIC_FRAME_COUNT: u32 = 1;

/// Fastest animation speed accepted by the engine
pub const MIN_FRAME_DELAY: u8 = 1;
/// Slowest animation speed accepted by the engine
pub const MAX_FRAME_DELAY: u8 = 4;
/// Animation speed used when none is given
pub const DEFAULT_FRAME_DELAY: u8 = 1;

// Index 0 is reserved by the engine's graphics table
/// Lowest starting index an export may use
pub const MIN_STARTING_INDEX: u32 = 1;
/// Starting index used when none is given
pub const DEFAULT_STARTING_INDEX: u32 = 1;

// Overlay styling
/// Grid line color
pub const OVERLAY_STROKE_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Half-transparent fill for selected tiles
pub const OVERLAY_FILL_COLOR: [u8; 4] = [255, 0, 0, 128];
/// Grid lines are `(width + height) / divisor` pixels wide, at least one
pub const STROKE_WIDTH_DIVISOR: u32 = 1000;
