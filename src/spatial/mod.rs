//! Spatial data structures for the tile grid
//!
//! This module contains spatial-related functionality including:
//! - Conversion between display, image and tile coordinates
//! - The selection set of tile coordinates

/// Grid configuration, display transform and coordinate conversion
pub mod geometry;
/// Toggleable set of selected tiles
pub mod selection;

pub use geometry::{DisplayTransform, GridConfig, PixelRect, TileCoordinate};
pub use selection::Selection;
