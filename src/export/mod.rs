//! Selection export
//!
//! This module turns a selection into the engine's graphics table format:
//! - Numbered graphic and per-row animation records
//! - Line encoding of those records

/// `Grh` line encoding
pub mod encoding;
/// Record numbering and row grouping
pub mod records;

pub use encoding::{compile_export, encode_records};
pub use records::{ExportConfig, ExportRecord, compile_records};
