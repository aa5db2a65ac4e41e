//! CLI entry point for the tetrahedral puzzle solver

use clap::Parser;
use tetratile::io::cli::{Cli, PuzzleRunner};

fn main() -> tetratile::Result<()> {
    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    runner.run()
}
