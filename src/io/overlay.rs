//! Grid overlay rendering and PNG export
//!
//! Draws the tile grid on a copy of the source image: selected tiles get a
//! half-transparent fill and every tile gets a solid outline. This is the
//! only place pixels are touched; geometry and selection stay pure.

use std::ops::Range;
use std::path::Path;

use image::{Pixel, Rgba, RgbaImage};

use crate::io::configuration::{OVERLAY_FILL_COLOR, OVERLAY_STROKE_COLOR, STROKE_WIDTH_DIVISOR};
use crate::io::error::{IndexerError, Result};
use crate::spatial::geometry::{PixelRect, tile_to_pixel_rect};
use crate::spatial::{GridConfig, Selection};

/// Outline width for an image of the given size
pub fn stroke_width(image_width: u32, image_height: u32) -> u32 {
    (image_width.saturating_add(image_height) / STROKE_WIDTH_DIVISOR).max(1)
}

/// Render the grid and selection over a copy of `base`
///
/// Only in-grid tiles are drawn. Rectangles pushed partly off the image by
/// the grid offset are clipped. Each tile outlines its left and top edges,
/// and the last column and row also close the right and bottom border, so
/// shared lines are drawn once and every line has the same width.
pub fn render_overlay(base: &RgbaImage, grid: &GridConfig, selection: &Selection) -> RgbaImage {
    let mut canvas = base.clone();
    let line_width = stroke_width(canvas.width(), canvas.height());

    let last_column = i64::from(grid.columns()) - 1;
    let last_row = i64::from(grid.rows()) - 1;

    for tile in grid.tiles() {
        let rect = tile_to_pixel_rect(tile, grid);
        if selection.contains(tile) {
            fill_rect(&mut canvas, &rect, Rgba(OVERLAY_FILL_COLOR));
        }
        let closing = Closing {
            right: i64::from(tile.column) == last_column,
            bottom: i64::from(tile.row) == last_row,
        };
        stroke_rect(&mut canvas, &rect, line_width, closing, Rgba(OVERLAY_STROKE_COLOR));
    }

    canvas
}

/// Save a rendered overlay, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_overlay(overlay: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IndexerError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    overlay
        .save(output_path)
        .map_err(|e| IndexerError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), "overlay written");
    Ok(())
}

// Intersection of [start, start + len) with [0, limit)
fn clip_span(start: i64, len: u32, limit: u32) -> Range<u32> {
    let end = (start + i64::from(len)).clamp(0, i64::from(limit));
    let start = start.clamp(0, i64::from(limit));
    (start as u32)..(end as u32)
}

fn fill_rect(canvas: &mut RgbaImage, rect: &PixelRect, color: Rgba<u8>) {
    let xs = clip_span(rect.x, rect.width, canvas.width());
    for y in clip_span(rect.y, rect.height, canvas.height()) {
        for x in xs.clone() {
            canvas.get_pixel_mut(x, y).blend(&color);
        }
    }
}

// Which far edges a tile outlines besides its left and top ones
#[derive(Clone, Copy)]
struct Closing {
    right: bool,
    bottom: bool,
}

fn stroke_rect(
    canvas: &mut RgbaImage,
    rect: &PixelRect,
    line_width: u32,
    closing: Closing,
    color: Rgba<u8>,
) {
    let line_width = i64::from(line_width);
    let right = rect.x + i64::from(rect.width) - 1;
    let bottom = rect.y + i64::from(rect.height) - 1;

    let xs = clip_span(rect.x, rect.width, canvas.width());
    for y in clip_span(rect.y, rect.height, canvas.height()) {
        let on_horizontal_edge = i64::from(y) - rect.y < line_width
            || (closing.bottom && bottom - i64::from(y) < line_width);
        for x in xs.clone() {
            let on_vertical_edge = i64::from(x) - rect.x < line_width
                || (closing.right && right - i64::from(x) < line_width);
            if on_horizontal_edge || on_vertical_edge {
                canvas.get_pixel_mut(x, y).blend(&color);
            }
        }
    }
}
