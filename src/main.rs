//! CLI entry point for breadth-first search across text grid maps

use clap::Parser;
use gridkit::io::cli::{Cli, FileProcessor};

// Allow print for the closing batch summary
#[allow(clippy::print_stderr)]
fn main() -> gridkit::Result<()> {
    let cli = Cli::parse();
    let show_summary = cli.should_show_progress();
    let processor = FileProcessor::new(cli);
    let summary = processor.process()?;

    if show_summary {
        eprintln!("{summary}");
    }
    Ok(())
}
