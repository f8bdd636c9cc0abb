//! CLI entry point for tiling generation

use clap::Parser;
use tessella::io::cli::{Cli, TilingProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> tessella::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tessella=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut processor = TilingProcessor::new(cli);
    processor.process()
}
