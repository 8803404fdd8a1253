//! Input/output around the tiler core
//!
//! Argument parsing, defaults, errors, logging setup and overlay rendering.

/// Command-line arguments and the indexing session driver
pub mod cli;
/// Grid and export defaults, clamping bounds and overlay styling
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Log subscriber setup
pub mod logging;
/// Grid overlay rendering and PNG export
pub mod overlay;
