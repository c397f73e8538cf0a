//! CLI entry point for generating and previewing stitch patterns

use clap::Parser;
use stitchpattern::io::cli::{Cli, PatternProcessor};

fn main() -> stitchpattern::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = PatternProcessor::new(cli);
    processor.process()
}
