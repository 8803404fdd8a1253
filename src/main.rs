//! CLI entry point for selecting sprite sheet tiles and exporting Grh lines

use clap::Parser;
use grhindexer::io::cli::{Cli, Indexer};

fn main() -> grhindexer::Result<()> {
    let cli = Cli::parse();
    grhindexer::io::logging::init(cli.quiet);
    Indexer::new(cli).process()
}
