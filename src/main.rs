//! CLI entry point for pixel wave collapse image synthesis

use clap::Parser;
use pixel_collapse::io::cli::{Cli, FileProcessor};
use pixel_collapse::io::logging::{init_logging, level_for};

fn main() -> pixel_collapse::Result<()> {
    let cli = Cli::parse();
    init_logging(level_for(cli.verbose, cli.quiet))?;
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
