//! Interactive session over one image
//!
//! Ties pointer resolution, selection and export together and tracks when
//! the overlay needs to be redrawn.

/// Session state, clearing rules and redraw tracking
pub mod tiler;

pub use tiler::{ImageTiler, OutOfGridPolicy, TilerSettings, ToggleOutcome};
