//! CLI entry point for the tile reassembly tool

use clap::Parser;
use tilejigsaw::io::cli::{Cli, PuzzleRunner};

fn main() -> tilejigsaw::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    let runner = PuzzleRunner::new(cli);
    runner.process()
}
