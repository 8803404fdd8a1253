//! Coordinate conversion between image pixels, displayed pixels and tile indices
//!
//! Three coordinate spaces are involved: image space (pixels of the source
//! sheet), display space (pixels of the scaled canvas on screen) and tile
//! space (integer column/row indices). Every function here is total. A
//! degenerate grid (zero tile size, image narrower than one tile) yields
//! non-finite intermediates which saturate when cast back to tile indices.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{IndexerError, invalid_parameter};

/// Zero-based (column, row) address of a single tile
///
/// Indices are signed because pointer conversion performs no clamping: a
/// click left of or above the grid resolves to a negative index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoordinate {
    /// Horizontal tile index
    pub column: i32,
    /// Vertical tile index
    pub row: i32,
}

impl TileCoordinate {
    /// Create a coordinate from column and row indices
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Sort key for raster (row-major) iteration
    pub const fn raster_key(self) -> (i32, i32) {
        (self.row, self.column)
    }
}

impl fmt::Display for TileCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.column, self.row)
    }
}

impl FromStr for TileCoordinate {
    type Err = IndexerError;

    /// Parses `"column,row"`, surrounding whitespace allowed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, row) = s
            .split_once(',')
            .ok_or_else(|| invalid_parameter("tile", &s, &"expected COLUMN,ROW"))?;

        let column = column
            .trim()
            .parse::<i32>()
            .map_err(|e| invalid_parameter("tile", &s, &e))?;
        let row = row
            .trim()
            .parse::<i32>()
            .map_err(|e| invalid_parameter("tile", &s, &e))?;

        Ok(Self { column, row })
    }
}

/// Tile grid laid over a source image
///
/// Tile size and image size are in image pixels. The offset shifts the
/// whole grid and may be negative. Column and row counts only depend on
/// tile and image size, so tiles may extend past the image edge when an
/// offset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Width of one tile in image pixels
    pub tile_width: u32,
    /// Height of one tile in image pixels
    pub tile_height: u32,
    /// Horizontal grid shift in image pixels
    pub offset_x: i32,
    /// Vertical grid shift in image pixels
    pub offset_y: i32,
    /// Source image width in pixels
    pub image_width: u32,
    /// Source image height in pixels
    pub image_height: u32,
}

impl GridConfig {
    /// Grid without offset over an image of the given size
    pub const fn new(tile_width: u32, tile_height: u32, image_width: u32, image_height: u32) -> Self {
        Self {
            tile_width,
            tile_height,
            offset_x: 0,
            offset_y: 0,
            image_width,
            image_height,
        }
    }

    /// Same grid shifted by the given pixel offset
    #[must_use]
    pub const fn with_offset(mut self, offset_x: i32, offset_y: i32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Number of whole tiles across the image, zero for a zero tile width
    pub const fn columns(&self) -> u32 {
        match self.image_width.checked_div(self.tile_width) {
            Some(columns) => columns,
            None => 0,
        }
    }

    /// Number of whole tiles down the image, zero for a zero tile height
    pub const fn rows(&self) -> u32 {
        match self.image_height.checked_div(self.tile_height) {
            Some(rows) => rows,
            None => 0,
        }
    }

    /// Whether the coordinate addresses a tile inside `[0, columns) x [0, rows)`
    pub fn contains(&self, tile: TileCoordinate) -> bool {
        u32::try_from(tile.column).is_ok_and(|column| column < self.columns())
            && u32::try_from(tile.row).is_ok_and(|row| row < self.rows())
    }

    /// Every in-grid tile in row-major order
    ///
    /// Counts beyond `i32::MAX` are capped, since coordinates are `i32`.
    pub fn tiles(&self) -> impl DoubleEndedIterator<Item = TileCoordinate> + use<> {
        let columns = i32::try_from(self.columns()).unwrap_or(i32::MAX);
        let rows = i32::try_from(self.rows()).unwrap_or(i32::MAX);
        (0..rows).flat_map(move |row| {
            (0..columns).map(move |column| TileCoordinate::new(column, row))
        })
    }
}

/// Mapping from image pixels to on-screen pixels
///
/// The image is scaled uniformly to fit inside its container, so the
/// displayed canvas may be smaller than the container along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    /// Display pixels per image pixel
    pub scale: f64,
    /// Width of the displayed canvas
    pub displayed_width: f64,
    /// Height of the displayed canvas
    pub displayed_height: f64,
}

impl DisplayTransform {
    /// Fit an image of the given size inside a container, preserving aspect ratio
    pub fn fit(image_width: u32, image_height: u32, container_width: u32, container_height: u32) -> Self {
        let image_width = f64::from(image_width);
        let image_height = f64::from(image_height);
        let scale = (f64::from(container_width) / image_width)
            .min(f64::from(container_height) / image_height);

        Self {
            scale,
            displayed_width: image_width * scale,
            displayed_height: image_height * scale,
        }
    }

    /// Image displayed at its native size
    pub fn identity(image_width: u32, image_height: u32) -> Self {
        Self {
            scale: 1.0,
            displayed_width: f64::from(image_width),
            displayed_height: f64::from(image_height),
        }
    }
}

/// Axis-aligned rectangle in image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge, may lie outside the image
    pub x: i64,
    /// Top edge, may lie outside the image
    pub y: i64,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Resolve a display-space pointer position to the tile beneath it
///
/// `pointer` and `container_origin` are both in display space (e.g. viewport
/// coordinates of the click and of the canvas' top-left corner). The grid
/// offset is defined in image space and is scaled before being removed.
/// Each displayed slot is one tile scaled to display space, so the slot
/// always matches the rectangle drawn for that tile, even when the image is
/// not a whole number of tiles wide. No bounds clamping is performed; a
/// zero-sized slot resolves to index 0.
pub fn pixel_to_tile(
    pointer: [f64; 2],
    container_origin: [f64; 2],
    config: &GridConfig,
    transform: &DisplayTransform,
) -> TileCoordinate {
    let [pointer_x, pointer_y] = pointer;
    let [origin_x, origin_y] = container_origin;

    let slot_width = f64::from(config.tile_width) * transform.scale;
    let slot_height = f64::from(config.tile_height) * transform.scale;

    let x = pointer_x - origin_x - f64::from(config.offset_x) * transform.scale;
    let y = pointer_y - origin_y - f64::from(config.offset_y) * transform.scale;

    TileCoordinate::new(slot_index(x, slot_width), slot_index(y, slot_height))
}

// Float to int casts saturate and map NaN to zero
fn slot_index(distance: f64, slot: f64) -> i32 {
    if slot > 0.0 {
        (distance / slot).floor() as i32
    } else {
        0
    }
}

/// Image-space rectangle covered by a tile, offset included
pub fn tile_to_pixel_rect(tile: TileCoordinate, config: &GridConfig) -> PixelRect {
    PixelRect {
        x: i64::from(tile.column) * i64::from(config.tile_width) + i64::from(config.offset_x),
        y: i64::from(tile.row) * i64::from(config.tile_height) + i64::from(config.offset_y),
        width: config.tile_width,
        height: config.tile_height,
    }
}
