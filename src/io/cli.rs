//! Command-line interface for selecting tiles and exporting `Grh` lines

use crate::engine::{ImageTiler, OutOfGridPolicy, TilerSettings, ToggleOutcome};
use crate::io::configuration::{
    DEFAULT_FRAME_DELAY, DEFAULT_GRAPHIC_SHEET, DEFAULT_OFFSET, DEFAULT_STARTING_INDEX,
    DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
};
use crate::io::error::{IndexerError, Result, invalid_parameter};
use crate::io::overlay::save_overlay;
use crate::spatial::TileCoordinate;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "grhindexer")]
#[command(
    author,
    version,
    about = "Select tiles of a sprite sheet and export them as Grh graphics and animations"
)]
/// Command-line arguments for the tile indexer
pub struct Cli {
    /// Source image (sprite sheet)
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Tile width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Tile height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Horizontal grid offset in pixels
    #[arg(short = 'x', long, default_value_t = DEFAULT_OFFSET, allow_negative_numbers = true)]
    pub offset_x: i32,

    /// Vertical grid offset in pixels
    #[arg(short = 'y', long, default_value_t = DEFAULT_OFFSET, allow_negative_numbers = true)]
    pub offset_y: i32,

    /// Graphic sheet number written on every graphic line
    #[arg(short, long, default_value_t = DEFAULT_GRAPHIC_SHEET)]
    pub graphic: u32,

    /// Animation speed, clamped to 1..=4
    #[arg(short = 'd', long, default_value_t = i64::from(DEFAULT_FRAME_DELAY), allow_negative_numbers = true)]
    pub frame_delay: i64,

    /// First Grh index, clamped to at least 1
    #[arg(short, long, default_value_t = i64::from(DEFAULT_STARTING_INDEX), allow_negative_numbers = true)]
    pub initial_index: i64,

    /// Toggle the tile at COLUMN,ROW (repeatable)
    #[arg(short, long = "select", value_name = "COLUMN,ROW", value_parser = parse_tile, allow_hyphen_values = true)]
    pub select: Vec<TileCoordinate>,

    /// Toggle the tile under a display-space click at X,Y (repeatable, applied after --select)
    #[arg(short, long = "click", value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    pub click: Vec<[f64; 2]>,

    /// Display container the image is fitted into for --click (defaults to the image size)
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_size)]
    pub container: Option<(u32, u32)>,

    /// Drop tiles outside the grid instead of selecting them
    #[arg(long)]
    pub ignore_out_of_grid: bool,

    /// Write the export here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the grid overlay as PNG
    #[arg(long, value_name = "PATH")]
    pub overlay: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Grid and export settings from the arguments
    pub const fn settings(&self) -> TilerSettings {
        TilerSettings {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            graphic: self.graphic,
            frame_delay: self.frame_delay,
            initial_index: self.initial_index,
        }
    }

    /// Out-of-grid handling selected by the arguments
    pub const fn out_of_grid_policy(&self) -> OutOfGridPolicy {
        if self.ignore_out_of_grid {
            OutOfGridPolicy::Ignore
        } else {
            OutOfGridPolicy::Accept
        }
    }
}

/// Parse `COLUMN,ROW`
///
/// # Errors
///
/// Returns a message if either part is missing or not an integer
pub fn parse_tile(value: &str) -> std::result::Result<TileCoordinate, String> {
    value.parse().map_err(|e: IndexerError| e.to_string())
}

/// Parse `X,Y` as display-space coordinates
///
/// # Errors
///
/// Returns a message if either part is missing or not a number
pub fn parse_point(value: &str) -> std::result::Result<[f64; 2], String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| invalid_parameter("click", &value, &"expected X,Y").to_string())?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid_parameter("click", &value, &e).to_string())?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid_parameter("click", &value, &e).to_string())?;
    Ok([x, y])
}

/// Parse `WIDTHxHEIGHT`
///
/// # Errors
///
/// Returns a message if either part is missing or not a non-negative integer
pub fn parse_size(value: &str) -> std::result::Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| invalid_parameter("container", &value, &"expected WIDTHxHEIGHT").to_string())?;
    let width = width
        .trim()
        .parse::<u32>()
        .map_err(|e| invalid_parameter("container", &value, &e).to_string())?;
    let height = height
        .trim()
        .parse::<u32>()
        .map_err(|e| invalid_parameter("container", &value, &e).to_string())?;
    Ok((width, height))
}

/// Runs one indexing session described by the CLI arguments
pub struct Indexer {
    cli: Cli,
}

impl Indexer {
    /// Create a new indexer with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Read the image size and apply every selection argument
    ///
    /// # Errors
    ///
    /// Returns an error if the image header cannot be read
    pub fn build_tiler(&self) -> Result<ImageTiler> {
        let (width, height) =
            image::image_dimensions(&self.cli.image).map_err(|e| IndexerError::ImageLoad {
                path: self.cli.image.clone(),
                source: e,
            })?;
        tracing::info!(path = %self.cli.image.display(), width, height, "image loaded");

        let mut tiler = ImageTiler::new(width, height, &self.cli.settings());
        tiler.set_out_of_grid_policy(self.cli.out_of_grid_policy());
        if let Some((container_width, container_height)) = self.cli.container {
            tiler.set_container(container_width, container_height);
        }

        for &tile in &self.cli.select {
            Self::log_toggle(tile, tiler.toggle(tile));
        }
        for &point in &self.cli.click {
            let (tile, outcome) = tiler.click(point, [0.0, 0.0]);
            Self::log_toggle(tile, outcome);
        }

        Ok(tiler)
    }

    /// Build the session, then write the overlay and export as requested
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read or an output cannot be written
    pub fn process(&self) -> Result<()> {
        let mut tiler = self.build_tiler()?;

        if let Some(overlay_path) = &self.cli.overlay {
            let base = image::open(&self.cli.image)
                .map_err(|e| IndexerError::ImageLoad {
                    path: self.cli.image.clone(),
                    source: e,
                })?
                .to_rgba8();
            save_overlay(&tiler.render(&base), overlay_path)?;
        }

        let Some(export) = tiler.copy_to_clipboard() else {
            tracing::warn!("nothing selected, no export written");
            return Ok(());
        };

        tracing::info!(
            tiles = tiler.selection().len(),
            lines = export.lines().count(),
            "export compiled"
        );

        match &self.cli.output {
            Some(path) => Self::write_file(path, &export),
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{export}")?;
                Ok(())
            }
        }
    }

    fn write_file(path: &Path, export: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| IndexerError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        std::fs::write(path, export).map_err(|e| IndexerError::FileSystem {
            path: path.to_path_buf(),
            operation: "write export",
            source: e,
        })?;
        tracing::info!(path = %path.display(), "export written");
        Ok(())
    }

    fn log_toggle(tile: TileCoordinate, outcome: ToggleOutcome) {
        match outcome {
            ToggleOutcome::Ignored => tracing::warn!(%tile, "tile outside the grid ignored"),
            ToggleOutcome::Selected => tracing::debug!(%tile, "tile selected"),
            ToggleOutcome::Deselected => tracing::debug!(%tile, "tile deselected"),
        }
    }
}
