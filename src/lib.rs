//! Tile grid selection and `Grh` graphics index export for sprite sheets
//!
//! A grid of fixed-size tiles is laid over a source image. Tiles are picked
//! by index or by display-space clicks, and the selection is compiled into
//! the engine's graphics table format: one static graphic per tile in raster
//! order, followed by one animation per selected row.

#![forbid(unsafe_code)]

/// Interactive session tying geometry, selection and export together
pub mod engine;
/// Selection compilation into graphic and animation records
pub mod export;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid geometry and the selection set
pub mod spatial;

pub use engine::ImageTiler;
pub use io::error::{IndexerError, Result};
